/// Category carousel screen - card window, dot indicators, search notice
use crate::components::{Breakpoint, CarouselState};
use jobdeck_core::types::Accent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Blue => Color::Blue,
        Accent::Green => Color::Green,
        Accent::Purple => Color::Magenta,
        Accent::Pink => Color::LightMagenta,
        Accent::Amber => Color::Yellow,
    }
}

pub struct CategoriesScreen<'a> {
    state: &'a CarouselState,
}

impl<'a> CategoriesScreen<'a> {
    pub fn new(state: &'a CarouselState) -> Self {
        Self { state }
    }

    fn render_cards(&self, area: Rect, buf: &mut Buffer) {
        let breakpoint = Breakpoint::for_width(area.width);
        let window = self.state.visible_window(breakpoint);

        let constraints: Vec<Constraint> = window
            .iter()
            .map(|_| Constraint::Ratio(1, window.len() as u32))
            .collect();
        let slots = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (slot, (index, emphasized)) in slots.iter().zip(window.iter()) {
            let category = &self.state.categories()[*index];
            let color = accent_color(category.accent);

            let border_type = if *emphasized {
                BorderType::Double
            } else {
                BorderType::Plain
            };
            let mut title_style = Style::default().fg(color);
            if *emphasized {
                title_style = title_style.add_modifier(Modifier::BOLD);
            }

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(color));
            let inner = block.inner(*slot);
            block.render(*slot, buf);

            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(category.icon, Style::default().fg(color))),
                Line::from(""),
                Line::from(Span::styled(category.name, title_style)),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(inner, buf);
        }
    }

    fn render_dots(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for index in 0..self.state.len() {
            let (symbol, style) = if index == self.state.current() {
                ("●", Style::default().fg(Color::White))
            } else {
                ("○", Style::default().fg(Color::DarkGray))
            };
            spans.push(Span::styled(symbol, style));
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_notice(&self, area: Rect, buf: &mut Buffer) {
        if let Some(notice) = self.state.notice() {
            let text = format!("Searching for {} jobs...", notice.category);
            Paragraph::new(Line::from(Span::styled(
                text,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Right)
            .render(area, buf);
        }
    }
}

impl<'a> Widget for CategoriesScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // notice banner
                Constraint::Length(2), // heading
                Constraint::Min(8),    // cards
                Constraint::Length(1), // dots
            ])
            .split(area);

        self.render_notice(chunks[0], buf);

        Paragraph::new(vec![
            Line::from(Span::styled(
                "Explore by Category",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Find your perfect role across popular job categories",
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

        self.render_cards(chunks[2], buf);
        self.render_dots(chunks[3], buf);
    }
}
