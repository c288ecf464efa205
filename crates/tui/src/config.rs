/// Human-readable labels rendered around the form and the result panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Heading shown above the question input.
	pub title: String,
	/// Dimmed text shown while the question is empty.
	pub placeholder: String,
	/// Title of the bordered question input.
	pub input_title: String,
	/// Hint shown in the status line while idle.
	pub submit_hint: String,
	/// Label next to the spinner while a request is outstanding.
	pub pending_label: String,
	/// Label of the Sanskrit toggle.
	pub toggle_label: String,
	/// Title of the bordered result panel.
	pub results_title: String,
	/// Sub-heading placed above each explanation.
	pub explanation_label: String,
	/// Prefix of the failure notice.
	pub failure_prefix: String,
	/// Shown when a request succeeded with an empty verse list.
	pub empty_results: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Ask the Bhagavad Gita".to_string(),
			placeholder: "Ask your question about life, karma, dharma, mind...".to_string(),
			input_title: "Question".to_string(),
			submit_hint: "Enter: get insights  Alt+Enter: new line  Esc: quit".to_string(),
			pending_label: "Processing...".to_string(),
			toggle_label: "Show Sanskrit".to_string(),
			results_title: "Insights".to_string(),
			explanation_label: "Explanation".to_string(),
			failure_prefix: "Request failed".to_string(),
			empty_results: "No verses returned.".to_string(),
		}
	}
}

impl UiLabels {
	/// Override the heading.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Override the placeholder.
	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}
}
