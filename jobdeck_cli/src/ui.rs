use crate::components::CarouselState;
/// Top-level TUI event loop and input handler
use crate::keymap::KeyMap;
use crate::screens::{CategoriesScreen, ProfileDialogScreen, ProfileDialogState};
use anyhow::Result;
use crossbeam_channel::{unbounded, Sender};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use jobdeck_core::api::{ApiError, UserApiClient};
use jobdeck_core::profile_form::Attachment;
use jobdeck_core::types::{default_categories, UpdateResponse, User};
use log::{error, info};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Terminal,
};
use std::io;
use std::thread;
use std::time::{Duration, Instant};

const TOAST_LIFETIME: Duration = Duration::from_secs(3);

type SubmitResult = std::result::Result<UpdateResponse, ApiError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Categories,
    ProfileDialog,
    Help,
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    error: bool,
    deadline: Instant,
}

pub struct AppState {
    screen: Screen,
    user: User,
    carousel: CarouselState,
    dialog: Option<ProfileDialogState>,
    pending_attachment: Option<Attachment>,
    toast: Option<Toast>,
    last_action: String,
    should_quit: bool,
}

impl AppState {
    pub fn new(user: User, pending_attachment: Option<Attachment>) -> Self {
        Self {
            screen: Screen::Categories,
            user,
            carousel: CarouselState::new(default_categories()),
            dialog: None,
            pending_attachment,
            toast: None,
            last_action: "Ready".to_string(),
            should_quit: false,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    fn show_toast(&mut self, message: impl Into<String>, error: bool, now: Instant) {
        let message = message.into();
        self.last_action = message.clone();
        self.toast = Some(Toast {
            message,
            error,
            deadline: now + TOAST_LIFETIME,
        });
    }

    /// Expire timed state; called once per event-loop iteration.
    fn tick(&mut self, now: Instant) {
        self.carousel.tick(now);
        if self.toast.as_ref().map_or(false, |t| now >= t.deadline) {
            self.toast = None;
        }
    }

    fn open_dialog(&mut self) {
        let mut dialog = ProfileDialogState::open(&self.user);
        dialog.form.set_attachment(self.pending_attachment.clone());
        self.dialog = Some(dialog);
        self.screen = Screen::ProfileDialog;
    }

    /// Drop the dialog, discarding any in-progress edits.
    fn close_dialog(&mut self) {
        self.dialog = None;
        self.screen = Screen::Categories;
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers, now: Instant) {
        // Ctrl+C always quits.
        if matches!(code, KeyCode::Char('c')) && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Categories => self.handle_categories_key(code, modifiers, now),
            Screen::ProfileDialog => self.handle_dialog_key(code, modifiers),
            Screen::Help => {
                if matches!(code, KeyCode::Char(_) | KeyCode::Enter | KeyCode::Esc) {
                    self.screen = Screen::Categories;
                }
            }
        }
    }

    fn handle_categories_key(&mut self, code: KeyCode, modifiers: KeyModifiers, now: Instant) {
        if KeyMap::is_quit(code, modifiers) {
            self.should_quit = true;
        } else if KeyMap::is_help(code) {
            self.screen = Screen::Help;
        } else if KeyMap::is_left(code) {
            self.carousel.prev();
        } else if KeyMap::is_right(code) {
            self.carousel.next();
        } else if let Some(index) = KeyMap::dot_index(code) {
            if index < self.carousel.len() {
                self.carousel.go_to(index);
            }
        } else if KeyMap::is_select(code) {
            let name = self.carousel.select_current(now);
            info!("category selected: {name}");
            self.last_action = format!("Searching for {name} jobs");
        } else if KeyMap::is_profile(code) {
            self.open_dialog();
        }
    }

    fn handle_dialog_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };

        if matches!(code, KeyCode::Esc) {
            // No cancellation of an in-flight request; the dialog stays up
            // until the outcome arrives.
            if !dialog.is_submitting() {
                self.close_dialog();
                self.last_action = "Profile edits discarded".to_string();
            }
            return;
        }

        if KeyMap::is_next_field(code) {
            dialog.focus_next();
        } else if KeyMap::is_prev_field(code) {
            dialog.focus_prev();
        } else if KeyMap::is_add_experience(code) {
            dialog.add_experience();
        } else if KeyMap::is_add_education(code) {
            dialog.add_education();
        } else if KeyMap::is_remove_entry(code) {
            dialog.remove_focused_entry();
        } else if matches!(code, KeyCode::Backspace) {
            dialog.backspace();
        } else if let KeyCode::Char(c) = code {
            if !modifiers.contains(KeyModifiers::CONTROL) {
                dialog.insert_char(c);
            }
        }
    }

    /// Kick off a submit on a worker thread unless one is already in flight.
    fn start_submit(&mut self, client: &UserApiClient, sender: &Sender<SubmitResult>) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };
        let Some(payload) = dialog.begin_submit() else {
            return;
        };

        self.last_action = "Submitting profile update".to_string();
        let client = client.clone();
        let sender = sender.clone();
        thread::spawn(move || {
            let _ = sender.send(client.update_profile(&payload));
        });
    }

    fn apply_submit_result(&mut self, result: SubmitResult, now: Instant) {
        match result {
            Ok(response) if response.success => {
                // Whole-record swap of the session user; never a partial merge.
                if let Some(user) = response.user {
                    self.user = user;
                }
                let message = if response.message.is_empty() {
                    "Profile updated".to_string()
                } else {
                    response.message
                };
                info!("profile update succeeded");
                self.show_toast(message, false, now);
                self.close_dialog();
            }
            Ok(response) => {
                let message = if response.message.is_empty() {
                    "Profile update failed".to_string()
                } else {
                    response.message
                };
                self.fail_submit(message, now);
            }
            Err(err) => {
                error!("profile update failed: {err}");
                self.fail_submit(err.user_message(), now);
            }
        }
    }

    /// Failure is terminal for the attempt: back to editing, form untouched.
    fn fail_submit(&mut self, message: String, now: Instant) {
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.finish_submit();
        }
        self.show_toast(message, true, now);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn render_help(area: Rect, buf: &mut ratatui::buffer::Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Help - Keybindings ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = vec![Line::from("")];
    for (key, desc) in KeyMap::help_text() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {key:10}"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc, Style::default().fg(Color::White)),
        ]));
    }
    Paragraph::new(lines).render(inner, buf);
}

fn render(frame: &mut ratatui::Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(frame.area());

    frame.render_widget(CategoriesScreen::new(&app.carousel), chunks[0]);

    match app.screen {
        Screen::ProfileDialog => {
            if let Some(dialog) = &app.dialog {
                let area = centered_rect(70, 80, chunks[0]);
                frame.render_widget(ProfileDialogScreen::new(dialog), area);
            }
        }
        Screen::Help => {
            let area = centered_rect(50, 70, chunks[0]);
            render_help(area, frame.buffer_mut());
        }
        Screen::Categories => {}
    }

    let status = match &app.toast {
        Some(toast) => {
            let color = if toast.error { Color::Red } else { Color::Green };
            Line::from(Span::styled(
                format!(" {} ", toast.message),
                Style::default().fg(Color::Black).bg(color),
            ))
        }
        None => Line::from(Span::styled(
            format!(" {} ", app.last_action),
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(status), chunks[1]);
}

pub fn run_tui(user: User, api_base: &str, attachment: Option<Attachment>) -> Result<()> {
    let client = UserApiClient::new(api_base)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (sender, receiver) = unbounded::<SubmitResult>();
    let mut app = AppState::new(user, attachment);

    while !app.should_quit {
        let now = Instant::now();
        app.tick(now);

        while let Ok(result) = receiver.try_recv() {
            app.apply_submit_result(result, Instant::now());
        }

        terminal.draw(|frame| render(frame, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if app.screen == Screen::ProfileDialog
                    && KeyMap::is_submit(key.code, key.modifiers)
                {
                    app.start_submit(&client, &sender);
                } else {
                    app.handle_key(key.code, key.modifiers, Instant::now());
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
