use gita_ask_core::QueryStatus;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthChar;

use crate::input::QuestionInput;
use crate::style::Theme;

/// Argument bundle for rendering the input area.
pub struct InputContext<'a> {
	/// The question input widget.
	pub question_input: &'a QuestionInput<'a>,
	/// Title drawn on the input border.
	pub title: &'a str,
	/// Placeholder text shown when input is empty.
	pub placeholder: Option<&'a str>,
	/// Rendering area, border included.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Everything the status line below the input needs.
pub struct StatusContext<'a> {
	pub status: QueryStatus,
	/// Failure detail of the latest request, if it failed.
	pub failure: Option<&'a str>,
	pub hint: &'a str,
	pub pending_label: &'a str,
	pub failure_prefix: &'a str,
	pub toggle_label: &'a str,
	/// Current Sanskrit toggle state.
	pub show_sanskrit: bool,
	/// The toggle is only drawn once there is a result to apply it to.
	pub show_toggle: bool,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the bordered question input with optional placeholder.
pub fn render_input(frame: &mut ratatui::Frame, input: InputContext<'_>) {
	let InputContext {
		question_input,
		title,
		placeholder,
		area,
		theme,
	} = input;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.prompt)
		.title(Span::styled(format!(" {title} "), theme.prompt));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	question_input.render_textarea(frame, inner);

	if question_input.is_empty()
		&& let Some(placeholder_text) = placeholder
	{
		render_placeholder(frame, inner, placeholder_text, theme);
	}
}

fn render_placeholder(frame: &mut ratatui::Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	// Leave the first column to the cursor.
	let left = area.left().saturating_add(1);
	let available = area.width.saturating_sub(1);
	let display_text = truncate_to_width(text, available as usize);
	let buffer = frame.buffer_mut();
	buffer.set_line(
		left,
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		available,
	);
}

/// Render the status row: progress or failure on the left, toggle on the right.
pub fn render_status(frame: &mut ratatui::Frame, status: StatusContext<'_>) {
	let StatusContext {
		status,
		failure,
		hint,
		pending_label,
		failure_prefix,
		toggle_label,
		show_sanskrit,
		show_toggle,
		throbber_state,
		area,
		theme,
	} = status;

	if area.width == 0 || area.height == 0 {
		return;
	}

	let muted_style = theme.empty_style();
	let left = match (status, failure) {
		(QueryStatus::Pending, _) => {
			let spinner = Throbber::default()
				.style(muted_style)
				.throbber_style(theme.highlight);
			Line::from(vec![
				spinner.to_symbol_span(throbber_state),
				Span::styled(pending_label.to_string(), muted_style),
			])
		}
		(QueryStatus::Failed, Some(detail)) => Line::from(Span::styled(
			format!("{failure_prefix}: {detail}"),
			theme.error,
		)),
		_ => Line::from(Span::styled(hint.to_string(), muted_style)),
	};

	let buffer = frame.buffer_mut();
	if !show_toggle {
		buffer.set_line(area.left(), area.top(), &left, area.width);
		return;
	}

	let marker = if show_sanskrit { "[x]" } else { "[ ]" };
	let toggle = Line::from(vec![
		Span::styled(format!("{marker} "), theme.toggle_style(show_sanskrit)),
		Span::styled(toggle_label.to_string(), muted_style),
		Span::styled(" (Ctrl+S)", muted_style),
	]);

	let toggle_width = u16::try_from(toggle.width()).unwrap_or(area.width);
	let left_width = if toggle_width.saturating_add(2) < area.width {
		area.width - toggle_width - 2
	} else {
		area.width
	};
	buffer.set_line(area.left(), area.top(), &left, left_width);

	if left_width < area.width {
		let start_x = area.right().saturating_sub(toggle_width);
		buffer.set_line(start_x, area.top(), &toggle, toggle_width);
	}
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
	let mut width = 0;
	let mut out = String::new();
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if width + ch_width > max_width {
			break;
		}
		width += ch_width;
		out.push(ch);
	}
	out
}
