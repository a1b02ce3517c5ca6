/// Profile update dialog - scalar fields, experience/education editors,
/// submit gate. Closing the dialog drops this state, discarding edits.
use jobdeck_core::profile_form::{ProfileForm, ScalarField, UpdatePayload};
use jobdeck_core::record_list::{date_only, EducationField, ExperienceField, RecordForm};
use jobdeck_core::types::User;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Editing,
    /// A submit request is in flight; further submits are ignored until the
    /// outcome arrives. Field edits stay possible.
    Submitting,
}

/// The focused edit slot. Record indices are re-derived against the current
/// list lengths on every navigation step and clamped after removal, so a
/// stale index never survives a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Scalar(ScalarField),
    Experience(usize, ExperienceField),
    Education(usize, EducationField),
}

pub struct ProfileDialogState {
    pub form: ProfileForm,
    pub focus: Focus,
    pub phase: DialogPhase,
}

impl ProfileDialogState {
    pub fn open(user: &User) -> Self {
        Self {
            form: ProfileForm::from_user(user),
            focus: Focus::Scalar(ScalarField::Fullname),
            phase: DialogPhase::Editing,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == DialogPhase::Submitting
    }

    /// Start a submit attempt. Returns the payload to send, or `None` while
    /// a prior attempt is still in flight; the phase flag is the sole mutual
    /// exclusion for re-submission.
    pub fn begin_submit(&mut self) -> Option<UpdatePayload> {
        if self.phase == DialogPhase::Submitting {
            return None;
        }
        self.phase = DialogPhase::Submitting;
        Some(self.form.to_payload())
    }

    /// A submit attempt failed; back to editing with the form untouched.
    pub fn finish_submit(&mut self) {
        self.phase = DialogPhase::Editing;
    }

    /// Walkable focus slots in display order, derived from the current form.
    fn focus_order(&self) -> Vec<Focus> {
        let mut order: Vec<Focus> = ScalarField::ALL.iter().copied().map(Focus::Scalar).collect();
        for index in 0..self.form.experience.len() {
            order.extend(
                ExperienceField::ALL
                    .iter()
                    .copied()
                    .map(|field| Focus::Experience(index, field)),
            );
        }
        for index in 0..self.form.education.len() {
            order.extend(
                EducationField::ALL
                    .iter()
                    .copied()
                    .map(|field| Focus::Education(index, field)),
            );
        }
        order
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let position = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(position + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let position = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(position + order.len() - 1) % order.len()];
    }

    pub fn add_experience(&mut self) {
        self.form.experience.add();
        self.focus = Focus::Experience(self.form.experience.len() - 1, ExperienceField::Title);
    }

    pub fn add_education(&mut self) {
        self.form.education.add();
        self.focus = Focus::Education(self.form.education.len() - 1, EducationField::Degree);
    }

    /// Remove the record under focus, if any, and clamp focus to the nearest
    /// remaining slot. No-op on scalar focus.
    pub fn remove_focused_entry(&mut self) {
        match self.focus {
            Focus::Experience(index, _) => {
                self.form.experience.remove(index);
                self.focus = if self.form.experience.is_empty() {
                    Focus::Scalar(ScalarField::Skills)
                } else {
                    let clamped = index.min(self.form.experience.len() - 1);
                    Focus::Experience(clamped, ExperienceField::Title)
                };
            }
            Focus::Education(index, _) => {
                self.form.education.remove(index);
                self.focus = if self.form.education.is_empty() {
                    Focus::Scalar(ScalarField::Skills)
                } else {
                    let clamped = index.min(self.form.education.len() - 1);
                    Focus::Education(clamped, EducationField::Degree)
                };
            }
            Focus::Scalar(_) => {}
        }
    }

    fn focused_is_date(&self) -> bool {
        match self.focus {
            Focus::Scalar(_) => false,
            Focus::Experience(_, field) => field.is_date(),
            Focus::Education(_, field) => field.is_date(),
        }
    }

    fn focused_value(&self) -> &str {
        match self.focus {
            Focus::Scalar(field) => self.form.scalar(field),
            Focus::Experience(index, field) => self
                .form
                .experience
                .get(index)
                .map(|record| record.get(field))
                .unwrap_or(""),
            Focus::Education(index, field) => self
                .form
                .education
                .get(index)
                .map(|record| record.get(field))
                .unwrap_or(""),
        }
    }

    /// What the edit control operates on: date fields expose only the date
    /// portion, so the first edit replaces the stored date-time with a plain
    /// date string.
    fn editable_value(&self) -> String {
        let raw = self.focused_value();
        if self.focused_is_date() {
            date_only(raw).to_string()
        } else {
            raw.to_string()
        }
    }

    fn apply(&mut self, value: String) {
        match self.focus {
            Focus::Scalar(field) => self.form.set_scalar(field, value),
            Focus::Experience(index, field) => self.form.experience.set_field(index, field, value),
            Focus::Education(index, field) => self.form.education.set_field(index, field, value),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        let mut value = self.editable_value();
        value.push(c);
        self.apply(value);
    }

    pub fn backspace(&mut self) {
        let mut value = self.editable_value();
        value.pop();
        self.apply(value);
    }
}

pub struct ProfileDialogScreen<'a> {
    state: &'a ProfileDialogState,
}

impl<'a> ProfileDialogScreen<'a> {
    pub fn new(state: &'a ProfileDialogState) -> Self {
        Self { state }
    }

    fn field_line(
        &self,
        label: &str,
        raw: &str,
        is_date: bool,
        focused: bool,
        indent: &'static str,
    ) -> Line<'static> {
        let shown = if is_date {
            date_only(raw).to_string()
        } else {
            raw.to_string()
        };
        let value_style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![
            Span::styled(
                format!("{indent}{label:12} "),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(format!("{shown} "), value_style),
        ])
    }

    /// All dialog lines plus the index of the focused one, for scrolling.
    fn lines(&self) -> (Vec<Line<'static>>, usize) {
        let state = self.state;
        let mut lines = Vec::new();
        let mut focused_line = 0;

        for field in ScalarField::ALL {
            if state.focus == Focus::Scalar(field) {
                focused_line = lines.len();
            }
            lines.push(self.field_line(
                field.label(),
                state.form.scalar(field),
                false,
                state.focus == Focus::Scalar(field),
                "  ",
            ));
        }
        let attachment = state
            .form
            .attachment()
            .map(|a| a.filename.clone())
            .unwrap_or_else(|| "none".to_string());
        lines.push(Line::from(Span::styled(
            format!("  {:12} {attachment}", "Resume"),
            Style::default().fg(Color::DarkGray),
        )));

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Experience  (F2 add, F5 remove)",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for (index, record) in state.form.experience.records().iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!("  #{}", index + 1),
                Style::default().fg(Color::DarkGray),
            )));
            for field in ExperienceField::ALL {
                if state.focus == Focus::Experience(index, field) {
                    focused_line = lines.len();
                }
                lines.push(self.field_line(
                    field.label(),
                    record.get(field),
                    field.is_date(),
                    state.focus == Focus::Experience(index, field),
                    "    ",
                ));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Education  (F3 add, F5 remove)",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for (index, record) in state.form.education.records().iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!("  #{}", index + 1),
                Style::default().fg(Color::DarkGray),
            )));
            for field in EducationField::ALL {
                if state.focus == Focus::Education(index, field) {
                    focused_line = lines.len();
                }
                lines.push(self.field_line(
                    field.label(),
                    record.get(field),
                    field.is_date(),
                    state.focus == Focus::Education(index, field),
                    "    ",
                ));
            }
        }

        (lines, focused_line)
    }
}

impl<'a> Widget for ProfileDialogScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let footer = match self.state.phase {
            DialogPhase::Submitting => " Submitting... please wait ",
            DialogPhase::Editing => " Tab next · S-Tab prev · Ctrl+s submit · Esc cancel ",
        };
        let footer_style = match self.state.phase {
            DialogPhase::Submitting => Style::default().fg(Color::Yellow),
            DialogPhase::Editing => Style::default().fg(Color::DarkGray),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                " Update Profile ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(Span::styled(footer, footer_style)));

        let inner = block.inner(area);
        block.render(area, buf);

        let (lines, focused_line) = self.lines();
        let viewport = inner.height as usize;
        let scroll = if viewport > 0 {
            focused_line.saturating_sub(viewport.saturating_sub(1)) as u16
        } else {
            0
        };
        Paragraph::new(lines).scroll((scroll, 0)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobdeck_core::profile_loader::demo_user;

    fn dialog() -> ProfileDialogState {
        ProfileDialogState::open(&demo_user())
    }

    #[test]
    fn test_open_starts_editing_at_first_scalar() {
        let state = dialog();
        assert_eq!(state.phase, DialogPhase::Editing);
        assert_eq!(state.focus, Focus::Scalar(ScalarField::Fullname));
    }

    #[test]
    fn test_focus_walks_scalars_then_records_and_wraps() {
        let mut state = dialog();
        let slots = 5 + state.form.experience.len() * 5 + state.form.education.len() * 5;

        for _ in 0..slots {
            state.focus_next();
        }
        assert_eq!(state.focus, Focus::Scalar(ScalarField::Fullname));

        state.focus_prev();
        assert_eq!(
            state.focus,
            Focus::Education(state.form.education.len() - 1, EducationField::Description)
        );
    }

    #[test]
    fn test_insert_and_backspace_edit_focused_field() {
        let mut state = dialog();
        state.focus = Focus::Scalar(ScalarField::Bio);
        let before = state.form.scalar(ScalarField::Bio).to_string();

        state.insert_char('!');
        assert_eq!(state.form.scalar(ScalarField::Bio), format!("{before}!"));

        state.backspace();
        assert_eq!(state.form.scalar(ScalarField::Bio), before);
    }

    #[test]
    fn test_date_field_edits_operate_on_date_portion() {
        let mut state = dialog();
        state.focus = Focus::Experience(0, ExperienceField::StartDate);
        assert_eq!(
            state.form.experience.get(0).unwrap().start_date,
            "2021-06-01T00:00:00.000Z"
        );

        state.backspace();
        // The time component is not editable and drops on the first edit.
        assert_eq!(state.form.experience.get(0).unwrap().start_date, "2021-06-0");
    }

    #[test]
    fn test_add_experience_focuses_new_entry() {
        let mut state = dialog();
        let before = state.form.experience.len();

        state.add_experience();

        assert_eq!(state.form.experience.len(), before + 1);
        assert_eq!(state.focus, Focus::Experience(before, ExperienceField::Title));
    }

    #[test]
    fn test_remove_focused_entry_clamps_focus() {
        let mut state = dialog();
        state.add_experience();
        state.add_experience();
        let last = state.form.experience.len() - 1;
        state.focus = Focus::Experience(last, ExperienceField::Company);

        state.remove_focused_entry();
        assert_eq!(
            state.focus,
            Focus::Experience(last - 1, ExperienceField::Title)
        );

        // Removing every entry falls back to a scalar slot.
        while !state.form.experience.is_empty() {
            state.focus = Focus::Experience(0, ExperienceField::Title);
            state.remove_focused_entry();
        }
        assert_eq!(state.focus, Focus::Scalar(ScalarField::Skills));
    }

    #[test]
    fn test_begin_submit_blocks_reentry_until_finish() {
        let mut state = dialog();

        let first = state.begin_submit();
        assert!(first.is_some());
        assert!(state.is_submitting());

        // A second submit while in flight is ignored.
        assert!(state.begin_submit().is_none());

        state.finish_submit();
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn test_edits_during_submit_are_kept_on_failure() {
        let mut state = dialog();
        state.begin_submit();

        state.focus = Focus::Scalar(ScalarField::Email);
        state.insert_char('x');
        let edited = state.form.scalar(ScalarField::Email).to_string();

        state.finish_submit();
        assert_eq!(state.form.scalar(ScalarField::Email), edited);
    }
}
