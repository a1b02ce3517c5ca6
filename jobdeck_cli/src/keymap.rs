/// Centralized keybindings and help text for the jobdeck TUI

use crossterm::event::{KeyCode, KeyModifiers};

pub struct KeyMap;

impl KeyMap {
    /// Get help text for all keybindings
    pub fn help_text() -> Vec<(&'static str, &'static str)> {
        vec![
            ("h/←", "Previous category"),
            ("l/→", "Next category"),
            ("1-9", "Jump to category"),
            ("Enter", "Search selected category"),
            ("p", "Open profile dialog"),
            ("Tab/↓", "Next field (dialog)"),
            ("S-Tab/↑", "Previous field (dialog)"),
            ("F2", "Add experience entry"),
            ("F3", "Add education entry"),
            ("F5", "Remove focused entry"),
            ("Ctrl+s", "Submit profile update"),
            ("Esc", "Close dialog, discard edits"),
            ("?", "Show help"),
            ("q", "Quit"),
        ]
    }

    /// Check if key is quit
    pub fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Char('q'))
            || (matches!(code, KeyCode::Char('c')) && modifiers.contains(KeyModifiers::CONTROL))
    }

    /// Check if key is help
    pub fn is_help(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('?'))
    }

    /// Check if key is carousel left
    pub fn is_left(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('h') | KeyCode::Left)
    }

    /// Check if key is carousel right
    pub fn is_right(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('l') | KeyCode::Right)
    }

    /// Dot-indicator jump: digit keys address categories 1..=9
    pub fn dot_index(code: KeyCode) -> Option<usize> {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                c.to_digit(10).map(|d| d as usize - 1)
            }
            _ => None,
        }
    }

    /// Check if key is select (search the current category)
    pub fn is_select(code: KeyCode) -> bool {
        matches!(code, KeyCode::Enter)
    }

    /// Check if key opens the profile dialog
    pub fn is_profile(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('p'))
    }

    /// Check if key is next field
    pub fn is_next_field(code: KeyCode) -> bool {
        matches!(code, KeyCode::Tab | KeyCode::Down)
    }

    /// Check if key is previous field
    pub fn is_prev_field(code: KeyCode) -> bool {
        matches!(code, KeyCode::BackTab | KeyCode::Up)
    }

    /// Check if key adds an experience entry
    pub fn is_add_experience(code: KeyCode) -> bool {
        matches!(code, KeyCode::F(2))
    }

    /// Check if key adds an education entry
    pub fn is_add_education(code: KeyCode) -> bool {
        matches!(code, KeyCode::F(3))
    }

    /// Check if key removes the focused entry
    pub fn is_remove_entry(code: KeyCode) -> bool {
        matches!(code, KeyCode::F(5))
    }

    /// Check if key is submit
    pub fn is_submit(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Char('s')) && modifiers.contains(KeyModifiers::CONTROL)
    }
}
