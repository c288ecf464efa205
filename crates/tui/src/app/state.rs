//! Core state container for the terminal application's front-end.

use std::sync::Arc;

use gita_ask_core::{QueryForm, QueryService, ResultView};
use throbber_widgets_tui::ThrobberState;

use super::QueryRuntime;
use crate::config::UiLabels;
use crate::input::QuestionInput;
use crate::style::{StyleConfig, Theme};

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.queries.shutdown();
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	/// Question text, request status, and latest result.
	pub form: QueryForm,
	/// Whether Sanskrit text is shown alongside each verse.
	pub view: ResultView,
	/// Text input widget for the question.
	pub question_input: QuestionInput<'a>,
	pub(crate) ui: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) queries: QueryRuntime,
	pub(crate) results_scroll: u16,
}

impl App<'_> {
	/// Construct an [`App`] that sends questions to `service`.
	pub fn new(service: Arc<dyn QueryService>) -> Self {
		let form = QueryForm::new();
		let mut question_input = QuestionInput::default();
		let style = StyleConfig::default();
		question_input.set_style(style.theme.prompt);

		Self {
			form,
			view: ResultView::default(),
			question_input,
			ui: UiLabels::default(),
			style,
			throbber_state: ThrobberState::default(),
			queries: QueryRuntime::spawn(service),
			results_scroll: 0,
		}
	}

	/// Pre-fill the question input.
	pub fn set_question(&mut self, question: impl Into<String>) {
		let question = question.into();
		self.question_input = QuestionInput::new(question.clone());
		self.question_input.set_style(self.style.theme.prompt);
		self.form.update_question(question);
	}

	/// Replace the labels shown around the form.
	pub fn set_labels(&mut self, labels: UiLabels) {
		self.ui = labels;
	}

	/// Apply a theme to every widget.
	pub fn set_theme(&mut self, theme: Theme) {
		self.style = StyleConfig::with_theme(theme);
		self.question_input.set_style(theme.prompt);
	}

	/// Set the initial Sanskrit toggle state.
	pub fn set_show_sanskrit(&mut self, show: bool) {
		self.view.set_show_secondary_text(show);
	}
}
