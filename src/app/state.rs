use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use crate::history::HistoryState;
use crate::place::Place;
use crate::suggest::SuggestEngine;

/// Longest the event loop waits for input before ticking the engine
pub const MAX_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    History,
}

/// Application state
pub struct App {
    pub input: TextArea<'static>,
    pub engine: SuggestEngine,
    pub history: HistoryState,
    /// Place shown in the details panel
    pub selected: Option<Place>,
    pub focus: Focus,
    selection_rx: Receiver<Place>,
    should_quit: bool,
}

fn create_input_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" City ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    textarea.set_placeholder_text("Type a city name");
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea
}

impl App {
    /// Create the app around a suggestion engine
    ///
    /// Picks made in the dropdown arrive through the engine's selection
    /// callback and are recorded in history on the next tick.
    pub fn new(mut engine: SuggestEngine, history: HistoryState) -> Self {
        let (selection_tx, selection_rx) = mpsc::channel();
        engine.set_on_select(Box::new(move |place: &Place| {
            let _ = selection_tx.send(place.clone());
        }));

        Self {
            input: create_input_textarea(),
            engine,
            history,
            selected: None,
            focus: Focus::Input,
            selection_rx,
            should_quit: false,
        }
    }

    pub fn query(&self) -> &str {
        self.input.lines()[0].as_str()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
        self.engine.shutdown();
    }

    /// Fill the input and start a lookup, as if typed
    pub fn prefill(&mut self, text: &str, now: Instant) {
        self.replace_query_with(text);
        self.engine.set_query(text, now);
    }

    /// Advance timers and apply finished lookups
    pub fn tick(&mut self, now: Instant) {
        self.engine.tick(now);
        self.engine.poll_responses();
        self.drain_selections();
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.engine
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .map_or(MAX_POLL_INTERVAL, |wait| wait.min(MAX_POLL_INTERVAL))
    }

    pub(super) fn drain_selections(&mut self) {
        while let Ok(place) = self.selection_rx.try_recv() {
            self.show_place(place);
        }
    }

    /// Show `place` in the details panel and record it
    pub(super) fn show_place(&mut self, place: Place) {
        log::debug!("Selected {}", place.label());
        self.history.record(&place);
        self.history.reset_selection();
        self.selected = Some(place);
    }

    /// Replace the input text without going through the engine
    pub(super) fn replace_query_with(&mut self, text: &str) {
        self.input.delete_line_by_head();
        self.input.delete_line_by_end();
        self.input.insert_str(text);
        self.input.move_cursor(CursorMove::End);
    }
}
