use gita_ask_core::VerseBlock;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::style::Theme;

/// Argument bundle for the verse panel.
pub struct VersePanel<'a> {
	/// Blocks produced by [`gita_ask_core::ResultView::render`].
	pub blocks: &'a [VerseBlock<'a>],
	pub title: &'a str,
	pub explanation_label: &'a str,
	/// Text shown when a result arrived without verses.
	pub empty_text: Option<&'a str>,
	/// Number of lines scrolled off the top.
	pub scroll: u16,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Convert verse blocks into display lines, one blank line between blocks.
#[must_use]
pub fn verse_lines<'a>(
	blocks: &'a [VerseBlock<'a>],
	explanation_label: &'a str,
	theme: &Theme,
) -> Vec<Line<'a>> {
	let mut lines = Vec::new();
	for (index, block) in blocks.iter().enumerate() {
		if index > 0 {
			lines.push(Line::default());
		}
		lines.push(Line::from(Span::styled(block.heading.as_str(), theme.highlight)));
		if let Some(sanskrit) = block.sanskrit_text {
			lines.extend(
				sanskrit
					.lines()
					.map(|line| Line::from(Span::styled(line, theme.secondary))),
			);
		}
		lines.extend(block.translation.lines().map(Line::from));
		lines.push(Line::from(Span::styled(explanation_label, theme.label)));
		lines.extend(block.explanation.lines().map(Line::from));
	}
	lines
}

/// Render the verse panel. Nothing is drawn when there is neither a block
/// nor an empty-result notice.
pub fn render_verses(frame: &mut ratatui::Frame, panel: VersePanel<'_>) {
	let VersePanel {
		blocks,
		title,
		explanation_label,
		empty_text,
		scroll,
		area,
		theme,
	} = panel;

	if area.width == 0 || area.height == 0 {
		return;
	}

	let lines = if blocks.is_empty() {
		match empty_text {
			Some(text) => vec![Line::from(Span::styled(text, theme.empty_style()))],
			None => return,
		}
	} else {
		verse_lines(blocks, explanation_label, theme)
	};

	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.empty_style())
		.title(Span::styled(format!(" {title} "), theme.label));
	let paragraph = Paragraph::new(lines)
		.block(block)
		.wrap(Wrap { trim: false })
		.scroll((scroll, 0));
	frame.render_widget(paragraph, area);
}
