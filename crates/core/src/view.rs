//! Display projection of a [`QueryResult`].
//!
//! [`ResultView`] holds the only state of the result panel, the Sanskrit
//! toggle, and turns a result into [`VerseBlock`]s that renderers draw
//! verbatim. It never mutates the result it is given.

use crate::model::{QueryResult, VerseNumber};

/// Heading prefix placed before each verse number.
pub const VERSE_HEADING_PREFIX: &str = "Verse";

/// Render-ready view of one verse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseBlock<'a> {
	/// Identifier exactly as the service sent it.
	pub verse_number: &'a VerseNumber,
	/// `Verse <number>`.
	pub heading: String,
	/// Original-language text, `None` while the toggle is off.
	pub sanskrit_text: Option<&'a str>,
	pub translation: &'a str,
	pub explanation: &'a str,
}

/// Result panel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultView {
	show_secondary_text: bool,
}

impl Default for ResultView {
	fn default() -> Self {
		Self {
			show_secondary_text: true,
		}
	}
}

impl ResultView {
	#[must_use]
	pub fn new(show_secondary_text: bool) -> Self {
		Self {
			show_secondary_text,
		}
	}

	#[must_use]
	pub fn shows_secondary_text(&self) -> bool {
		self.show_secondary_text
	}

	pub fn set_show_secondary_text(&mut self, flag: bool) {
		self.show_secondary_text = flag;
	}

	pub fn toggle_secondary_text(&mut self) {
		self.show_secondary_text = !self.show_secondary_text;
	}

	/// Project `result` into blocks, one per verse and in the same order.
	#[must_use]
	pub fn render<'a>(&self, result: Option<&'a QueryResult>) -> Vec<VerseBlock<'a>> {
		let Some(result) = result else {
			return Vec::new();
		};

		result
			.verses
			.iter()
			.map(|verse| VerseBlock {
				verse_number: &verse.verse_number,
				heading: heading(&verse.verse_number),
				sanskrit_text: self
					.show_secondary_text
					.then_some(verse.sanskrit_text.as_str()),
				translation: &verse.translation,
				explanation: &verse.explanation,
			})
			.collect()
	}
}

fn heading(number: &VerseNumber) -> String {
	format!("{VERSE_HEADING_PREFIX} {number}")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::VerseInsight;

	fn three_verses() -> QueryResult {
		QueryResult::new(vec![
			VerseInsight::new("2.47", "karmaṇy evādhikāras te", "duty", "act"),
			VerseInsight::new("3.19", "tasmād asaktaḥ satataṁ", "detachment", "let go"),
			VerseInsight::new("18.66", "sarva-dharmān parityajya", "surrender", "trust"),
		])
	}

	#[test]
	fn absent_result_renders_nothing() {
		assert!(ResultView::default().render(None).is_empty());
	}

	#[test]
	fn blocks_follow_input_order() {
		let result = three_verses();
		let blocks = ResultView::default().render(Some(&result));

		let headings: Vec<&str> = blocks.iter().map(|block| block.heading.as_str()).collect();
		assert_eq!(headings, ["Verse 2.47", "Verse 3.19", "Verse 18.66"]);
	}

	#[test]
	fn toggle_hides_and_restores_sanskrit_only() {
		let result = three_verses();
		let mut view = ResultView::default();
		let shown = view.render(Some(&result));
		assert!(shown.iter().all(|block| block.sanskrit_text.is_some()));

		view.set_show_secondary_text(false);
		let hidden = view.render(Some(&result));
		assert!(hidden.iter().all(|block| block.sanskrit_text.is_none()));

		view.set_show_secondary_text(true);
		let restored = view.render(Some(&result));
		assert_eq!(restored, shown);

		for (with, without) in shown.iter().zip(&hidden) {
			assert_eq!(with.heading, without.heading);
			assert_eq!(with.translation, without.translation);
			assert_eq!(with.explanation, without.explanation);
		}
	}

	#[test]
	fn toggle_flips_the_flag() {
		let mut view = ResultView::new(true);
		view.toggle_secondary_text();
		assert!(!view.shows_secondary_text());
		view.toggle_secondary_text();
		assert!(view.shows_secondary_text());
	}

	#[test]
	fn empty_verse_list_renders_no_blocks() {
		let result = QueryResult::default();
		assert!(ResultView::default().render(Some(&result)).is_empty());
	}
}
