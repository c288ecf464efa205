use std::fmt::Write;

use anyhow::Result;
use gita_ask_core::VerseBlock;
use serde_json::json;

/// Render verse blocks as plain text, one blank line between blocks.
pub(crate) fn format_plain(blocks: &[VerseBlock<'_>]) -> String {
	if blocks.is_empty() {
		return "No verses returned.".to_string();
	}

	let mut out = String::new();
	for (index, block) in blocks.iter().enumerate() {
		if index > 0 {
			out.push('\n');
		}
		let _ = writeln!(out, "{}", block.heading);
		if let Some(sanskrit) = block.sanskrit_text {
			let _ = writeln!(out, "{sanskrit}");
		}
		let _ = writeln!(out, "{}", block.translation);
		let _ = writeln!(out, "Explanation: {}", block.explanation);
	}
	out
}

pub(crate) fn print_plain(blocks: &[VerseBlock<'_>]) {
	print!("{}", format_plain(blocks));
	if blocks.is_empty() {
		println!();
	}
}

/// Format the answer as a JSON document. `verse_no` keeps the service's
/// representation. Hidden Sanskrit is omitted.
pub(crate) fn format_blocks_json(question: &str, blocks: &[VerseBlock<'_>]) -> Result<String> {
	let verses: Vec<_> = blocks
		.iter()
		.map(|block| {
			let mut verse = json!({
				"verse_no": block.verse_number,
				"heading": block.heading,
				"translation": block.translation,
				"explanation": block.explanation,
			});
			if let Some(sanskrit) = block.sanskrit_text {
				verse["sanskrit_text"] = json!(sanskrit);
			}
			verse
		})
		.collect();

	let payload = json!({
		"question": question,
		"verses": verses,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(question: &str, blocks: &[VerseBlock<'_>]) -> Result<()> {
	println!("{}", format_blocks_json(question, blocks)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use gita_ask_core::{QueryResult, ResultView, VerseInsight, VerseNumber};
	use serde_json::Value;

	use super::*;

	fn result() -> QueryResult {
		QueryResult::new(vec![
			VerseInsight::new(
				"2.47",
				"karmany evadhikaras te",
				"You have a right to your duties.",
				"Act without attachment.",
			),
			VerseInsight::new("3.19", "tasmad asaktah", "Work unattached.", "Duty is its own reward."),
		])
	}

	#[test]
	fn plain_output_lists_blocks_in_order() {
		let result = result();
		let blocks = ResultView::new(true).render(Some(&result));

		insta::assert_snapshot!(format_plain(&blocks), @r"
		Verse 2.47
		karmany evadhikaras te
		You have a right to your duties.
		Explanation: Act without attachment.

		Verse 3.19
		tasmad asaktah
		Work unattached.
		Explanation: Duty is its own reward.
		");
	}

	#[test]
	fn plain_output_without_sanskrit() {
		let result = result();
		let blocks = ResultView::new(false).render(Some(&result));

		let text = format_plain(&blocks);
		assert!(!text.contains("karmany"));
		assert!(text.starts_with("Verse 2.47\nYou have a right to your duties.\n"));
	}

	#[test]
	fn empty_result_has_a_notice() {
		assert_eq!(format_plain(&[]), "No verses returned.");
	}

	#[test]
	fn json_omits_hidden_sanskrit() {
		let result = result();
		let blocks = ResultView::new(false).render(Some(&result));

		let json = format_blocks_json("What is dharma?", &blocks).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["question"], "What is dharma?");
		assert_eq!(value["verses"][0]["heading"], "Verse 2.47");
		assert!(value["verses"][0].get("sanskrit_text").is_none());
		assert_eq!(value["verses"][1]["translation"], "Work unattached.");
	}

	#[test]
	fn json_keeps_raw_verse_number() {
		let result = QueryResult::new(vec![
			VerseInsight::new("2.47", "s", "t", "e"),
			VerseInsight::new(VerseNumber::Number(serde_json::Number::from(18_u64)), "s", "t", "e"),
		]);
		let blocks = ResultView::new(true).render(Some(&result));

		let json = format_blocks_json("What is dharma?", &blocks).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["verses"][0]["verse_no"], "2.47");
		assert_eq!(value["verses"][1]["verse_no"], 18);
		assert_eq!(value["verses"][1]["heading"], "Verse 18");
	}
}
