use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, Focus};

impl App {
    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // Try global keys first
        if self.handle_global_keys(key, now) {
            return;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key, now),
            Focus::History => self.handle_history_key(key),
        }
    }

    /// Handle keys that work regardless of focus
    /// Returns true if key was handled
    fn handle_global_keys(&mut self, key: KeyEvent, now: Instant) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus(now);
                true
            }
            _ => false,
        }
    }

    /// Moving focus off the input blurs it; the dropdown lingers for the
    /// grace window before closing.
    fn toggle_focus(&mut self, now: Instant) {
        match self.focus {
            Focus::Input => {
                self.focus = Focus::History;
                self.history.reset_selection();
                self.engine.blur(now);
            }
            Focus::History => {
                self.focus = Focus::Input;
                self.engine.focus();
            }
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Down => self.engine.highlight_next(),
            KeyCode::Up => self.engine.highlight_prev(),
            KeyCode::Enter => {
                if self.engine.pick_highlighted().is_some() {
                    let label = self.engine.query().to_string();
                    self.replace_query_with(&label);
                    self.drain_selections();
                }
            }
            KeyCode::Esc => {
                if self.engine.state().is_open {
                    self.engine.dismiss();
                } else {
                    self.quit();
                }
            }
            _ => {
                if self.input.input(key) {
                    let query = self.query().to_string();
                    self.engine.set_query(&query, now);
                }
            }
        }
    }

    fn handle_history_key(&mut self, key: KeyEvent) {
        let query = self.query().to_string();
        match key.code {
            KeyCode::Down => self.history.select_next(&query),
            KeyCode::Up => self.history.select_prev(&query),
            KeyCode::Enter => {
                if let Some(entry) = self.history.selected_entry(&query) {
                    let place = entry.place.clone();
                    let label = place.label();
                    self.engine.settle_query(label.clone());
                    self.replace_query_with(&label);
                    self.show_place(place);
                }
                self.focus = Focus::Input;
                self.engine.focus();
            }
            KeyCode::Esc => {
                self.focus = Focus::Input;
                self.engine.focus();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
