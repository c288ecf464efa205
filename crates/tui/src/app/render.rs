use gita_ask_core::QueryStatus;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::App;
use crate::components::{
	InputContext, StatusContext, VersePanel, render_input, render_status, render_verses,
	verse_lines,
};

/// Rows of text shown in the question input before it stops growing.
const MAX_INPUT_ROWS: u16 = 6;

/// Visible input rows for a question of `line_count` lines.
fn input_rows(line_count: usize) -> u16 {
	u16::try_from(line_count)
		.unwrap_or(MAX_INPUT_ROWS)
		.clamp(1, MAX_INPUT_ROWS)
}

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let area = area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let input_rows = input_rows(self.question_input.line_count());
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(input_rows + 2),
				Constraint::Length(1),
				Constraint::Min(1),
			])
			.split(area);

		let theme = self.style.theme;
		let title = Paragraph::new(Line::from(Span::styled(self.ui.title.as_str(), theme.header)))
			.alignment(Alignment::Center);
		frame.render_widget(title, layout[0]);

		render_input(
			frame,
			InputContext {
				question_input: &self.question_input,
				title: &self.ui.input_title,
				placeholder: Some(self.ui.placeholder.as_str()),
				area: layout[1],
				theme: &theme,
			},
		);

		render_status(
			frame,
			StatusContext {
				status: self.form.status(),
				failure: self.form.failure(),
				hint: &self.ui.submit_hint,
				pending_label: &self.ui.pending_label,
				failure_prefix: &self.ui.failure_prefix,
				toggle_label: &self.ui.toggle_label,
				show_sanskrit: self.view.shows_secondary_text(),
				show_toggle: self.form.result().is_some(),
				throbber_state: &self.throbber_state,
				area: layout[2],
				theme: &theme,
			},
		);

		let blocks = self.view.render(self.form.result());
		let line_count = verse_lines(&blocks, &self.ui.explanation_label, &theme).len();
		let max_scroll = u16::try_from(line_count.saturating_sub(1)).unwrap_or(u16::MAX);
		self.results_scroll = self.results_scroll.min(max_scroll);

		let empty_text = (self.form.status() == QueryStatus::Succeeded && blocks.is_empty())
			.then_some(self.ui.empty_results.as_str());
		render_verses(
			frame,
			VersePanel {
				blocks: &blocks,
				title: &self.ui.results_title,
				explanation_label: &self.ui.explanation_label,
				empty_text,
				scroll: self.results_scroll,
				area: layout[3],
				theme: &theme,
			},
		);
	}
}
