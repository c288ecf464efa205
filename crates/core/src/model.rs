//! Wire model shared by the HTTP service and the renderers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body sent to the verse service.
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest<'a> {
	/// Natural-language question, sent verbatim.
	pub question: &'a str,
}

/// Identifier of a verse as returned by the service.
///
/// The service may send either a string (`"2.47"`) or a JSON number. Both
/// are kept verbatim and only ever displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerseNumber {
	/// Textual identifier such as `"2.47"`.
	Text(String),
	/// Numeric identifier, preserved with its original JSON representation.
	Number(serde_json::Number),
}

impl fmt::Display for VerseNumber {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(text) => f.write_str(text),
			Self::Number(number) => write!(f, "{number}"),
		}
	}
}

impl From<&str> for VerseNumber {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

/// One verse together with its translation and generated explanation.
///
/// Every field is an opaque display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseInsight {
	/// Verse identifier (`verse_no` on the wire).
	#[serde(rename = "verse_no")]
	pub verse_number: VerseNumber,
	/// Original-language text.
	pub sanskrit_text: String,
	/// Translation of the verse.
	pub translation: String,
	/// Explanation of the verse in the context of the question.
	pub explanation: String,
}

impl VerseInsight {
	/// Build a verse from its display fields.
	pub fn new(
		verse_number: impl Into<VerseNumber>,
		sanskrit_text: impl Into<String>,
		translation: impl Into<String>,
		explanation: impl Into<String>,
	) -> Self {
		Self {
			verse_number: verse_number.into(),
			sanskrit_text: sanskrit_text.into(),
			translation: translation.into(),
			explanation: explanation.into(),
		}
	}
}

/// Successful response of one submission. Order is the service's order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
	pub verses: Vec<VerseInsight>,
}

impl QueryResult {
	#[must_use]
	pub fn new(verses: Vec<VerseInsight>) -> Self {
		Self { verses }
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.verses.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.verses.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verse_number_accepts_strings_and_numbers() {
		let body = r#"{"verses":[
			{"verse_no":"2.47","sanskrit_text":"a","translation":"b","explanation":"c"},
			{"verse_no":18,"sanskrit_text":"d","translation":"e","explanation":"f"},
			{"verse_no":3.5,"sanskrit_text":"g","translation":"h","explanation":"i"}
		]}"#;

		let result: QueryResult = serde_json::from_str(body).unwrap();

		let numbers: Vec<String> = result
			.verses
			.iter()
			.map(|verse| verse.verse_number.to_string())
			.collect();
		assert_eq!(numbers, ["2.47", "18", "3.5"]);
	}

	#[test]
	fn missing_fields_are_rejected() {
		let body = r#"{"verses":[{"verse_no":"2.47","translation":"b"}]}"#;
		assert!(serde_json::from_str::<QueryResult>(body).is_err());
	}

	#[test]
	fn request_body_has_only_the_question() {
		let body = serde_json::to_value(AskRequest {
			question: "What is dharma?",
		})
		.unwrap();
		assert_eq!(body, serde_json::json!({ "question": "What is dharma?" }));
	}

	#[test]
	fn verses_serialize_with_wire_names() {
		let verse = VerseInsight::new("2.47", "karmaṇy evādhikāras te", "t", "e");
		let value = serde_json::to_value(&verse).unwrap();
		assert_eq!(value["verse_no"], "2.47");
		assert_eq!(value["sanskrit_text"], "karmaṇy evādhikāras te");
	}
}
