//! Multi-line question input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Editable question text.
pub struct QuestionInput<'a> {
	textarea: TextArea<'a>,
}

impl Default for QuestionInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

impl QuestionInput<'_> {
	/// Create an input pre-filled with `initial`, cursor at the end.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let initial = initial.into();
		let mut textarea = if initial.is_empty() {
			TextArea::default()
		} else {
			TextArea::new(initial.split('\n').map(str::to_string).collect())
		};
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::Bottom);
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current text with lines joined by `\n`.
	#[must_use]
	pub fn text(&self) -> String {
		self.textarea.lines().join("\n")
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.textarea.lines().iter().all(String::is_empty)
	}

	/// Number of text lines, at least one.
	#[must_use]
	pub fn line_count(&self) -> usize {
		self.textarea.lines().len().max(1)
	}

	/// Forward a key to the editor. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.textarea.input(key)
	}

	pub fn insert_newline(&mut self) {
		self.textarea.insert_newline();
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	/// Draw the editor into `area` without any surrounding block.
	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyModifiers};

	use super::*;

	#[test]
	fn typed_characters_update_text() {
		let mut input = QuestionInput::default();
		assert!(input.is_empty());

		for ch in "Why act?".chars() {
			assert!(input.input(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)));
		}

		assert_eq!(input.text(), "Why act?");
	}

	#[test]
	fn prefilled_text_keeps_lines() {
		let mut input = QuestionInput::new("first\nsecond");
		assert_eq!(input.line_count(), 2);

		input.insert_newline();
		assert_eq!(input.text(), "first\nsecond\n");
	}
}
