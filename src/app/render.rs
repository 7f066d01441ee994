use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use super::state::{App, Focus};
use crate::history::MAX_VISIBLE_HISTORY;
use crate::place::Place;

/// Dropdown height: one row per suggestion plus borders
const DROPDOWN_HEIGHT: u16 = 7;

const HELP_LINE: &str = " Enter pick · ↑/↓ move · Tab history · Esc close/quit";

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Cut `text` to `max_width` display columns, ending with `…` when cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            out.pop();
            out.push('…');
            return out;
        }
        width += ch_width;
        out.push(ch);
    }
    out
}

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(DROPDOWN_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let body = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(layout[2]);

        self.render_input_field(frame, layout[0]);
        self.render_dropdown(frame, layout[1]);
        self.render_details(frame, body[0]);
        self.render_history(frame, body[1]);
        frame.render_widget(
            Paragraph::new(HELP_LINE).style(Style::default().fg(Color::DarkGray)),
            layout[3],
        );
    }

    fn render_input_field(&mut self, frame: &mut Frame, area: Rect) {
        self.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" City ")
                .border_style(border_style(self.focus == Focus::Input)),
        );
        frame.render_widget(&self.input, area);
    }

    fn render_dropdown(&self, frame: &mut Frame, area: Rect) {
        let state = self.engine.state();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(border_style(state.is_open));
        let inner_width = area.width.saturating_sub(4) as usize;

        let lines: Vec<Line> = if state.is_loading {
            vec![Line::styled(
                "Searching…",
                Style::default().fg(Color::Yellow),
            )]
        } else if let Some(error) = &state.error {
            vec![Line::styled(error.as_str(), Style::default().fg(Color::Red))]
        } else if state.shows_no_results() {
            vec![Line::styled(
                "No places found",
                Style::default().fg(Color::DarkGray),
            )]
        } else if state.is_open {
            state
                .results
                .iter()
                .enumerate()
                .map(|(idx, place)| {
                    let label = truncate_to_width(&place.label(), inner_width);
                    if state.highlighted == Some(idx) {
                        Line::from(vec![
                            Span::styled("▸ ", Style::default().fg(Color::Cyan)),
                            Span::styled(label, Style::default().add_modifier(Modifier::REVERSED)),
                        ])
                    } else {
                        Line::from(vec![Span::raw("  "), Span::raw(label)])
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_details(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Place ")
            .border_style(border_style(false));

        let lines = match &self.selected {
            Some(place) => place_details(place),
            None => vec![Line::styled(
                "Pick a suggestion to see details",
                Style::default().fg(Color::DarkGray),
            )],
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_history(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::History;
        let title = if self.history.is_persistent() {
            " History "
        } else {
            " History (not saved) "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style(focused));
        let inner_width = area.width.saturating_sub(4) as usize;

        let visible = self.history.visible(self.query());
        let lines: Vec<Line> = if visible.is_empty() {
            vec![Line::styled(
                "No recent searches",
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            visible
                .iter()
                .take(MAX_VISIBLE_HISTORY)
                .enumerate()
                .map(|(idx, entry)| {
                    let label = truncate_to_width(&entry.label(), inner_width);
                    if focused && idx == self.history.selected_index() {
                        Line::from(vec![
                            Span::styled("▸ ", Style::default().fg(Color::Cyan)),
                            Span::styled(label, Style::default().add_modifier(Modifier::REVERSED)),
                        ])
                    } else {
                        Line::from(vec![Span::raw("  "), Span::raw(label)])
                    }
                })
                .collect()
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn place_details(place: &Place) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::styled(place.city.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Line::default(),
    ];
    if let Some(region) = place.region() {
        lines.push(Line::from(vec![
            Span::styled("Region    ", label_style),
            Span::raw(region.to_string()),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("Country   ", label_style),
        Span::raw(place.country.clone()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Location  ", label_style),
        Span::raw(place.coordinates()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Timezone  ", label_style),
        Span::raw(place.timezone.clone()),
    ]));
    lines
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
