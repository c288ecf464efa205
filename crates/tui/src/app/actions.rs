use std::ops::ControlFlow;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::App;

/// Lines moved per PageUp/PageDown.
const SCROLL_STEP: u16 = 5;

impl App<'_> {
	/// Process a keyboard event. Breaks when the user asks to exit.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> ControlFlow<()> {
		match key.code {
			KeyCode::Esc => return ControlFlow::Break(()),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return ControlFlow::Break(());
			}
			// Ctrl+S toggles the Sanskrit text
			KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.view.toggle_secondary_text();
				debug!(show = self.view.shows_secondary_text(), "sanskrit toggled");
			}
			KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
				self.question_input.insert_newline();
				self.form.update_question(self.question_input.text());
			}
			KeyCode::Enter => self.submit_question(),
			KeyCode::PageUp => {
				self.results_scroll = self.results_scroll.saturating_sub(SCROLL_STEP);
			}
			KeyCode::PageDown => {
				self.results_scroll = self.results_scroll.saturating_add(SCROLL_STEP);
			}
			_ => {
				if self.question_input.input(key) {
					self.form.update_question(self.question_input.text());
				}
			}
		}
		ControlFlow::Continue(())
	}
}
