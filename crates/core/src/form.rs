//! Question form state machine.
//!
//! The state lives in an explicit [`QueryState`] value and every change goes
//! through [`transition`], a pure function from `(state, event)` to the next
//! state plus an optional [`QueryRequest`] that the caller must dispatch.
//! [`QueryForm`] owns one state instance and adds the logging side of the
//! contract.
//!
//! ```text
//! Idle -> Pending -> Succeeded
//!            \-----> Failed
//! Succeeded | Failed -> Pending   (on the next accepted submit)
//! ```

use tracing::{debug, error};

use crate::error::RequestFailed;
use crate::model::QueryResult;
use crate::service::QueryService;

/// Submission status of the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryStatus {
	#[default]
	Idle,
	/// Exactly one request is outstanding.
	Pending,
	Succeeded,
	Failed,
}

impl QueryStatus {
	#[must_use]
	pub fn is_pending(self) -> bool {
		self == Self::Pending
	}
}

/// Ephemeral state behind the question form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
	question: String,
	status: QueryStatus,
	result: Option<QueryResult>,
	failure: Option<String>,
	in_flight: Option<u64>,
	last_id: u64,
}

impl QueryState {
	#[must_use]
	pub fn question(&self) -> &str {
		&self.question
	}

	#[must_use]
	pub fn status(&self) -> QueryStatus {
		self.status
	}

	/// Present only while the status is [`QueryStatus::Succeeded`].
	#[must_use]
	pub fn result(&self) -> Option<&QueryResult> {
		self.result.as_ref()
	}

	/// Diagnostic of the last failure, present only while [`QueryStatus::Failed`].
	#[must_use]
	pub fn failure(&self) -> Option<&str> {
		self.failure.as_deref()
	}

	/// Identifier of the outstanding request, if any.
	#[must_use]
	pub fn in_flight(&self) -> Option<u64> {
		self.in_flight
	}

	fn can_submit(&self) -> bool {
		!self.status.is_pending() && !self.question.trim().is_empty()
	}
}

/// Request the caller must hand to a [`QueryService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
	/// Correlates the eventual completion with this submission.
	pub id: u64,
	/// Question text exactly as typed.
	pub question: String,
}

/// Inputs accepted by [`transition`].
#[derive(Debug, Clone)]
pub enum QueryEvent {
	/// The question text was replaced.
	QuestionEdited(String),
	/// The user asked to submit the current question.
	Submitted,
	/// The request with `id` finished.
	Completed {
		id: u64,
		outcome: Result<QueryResult, RequestFailed>,
	},
}

/// Apply `event` to `state`.
///
/// Returns the next state and, for an accepted submission, the request to
/// dispatch. Submissions with a blank question or while a request is
/// outstanding leave the state untouched. Completions that do not match the
/// outstanding request are ignored.
#[must_use]
pub fn transition(mut state: QueryState, event: QueryEvent) -> (QueryState, Option<QueryRequest>) {
	match event {
		QueryEvent::QuestionEdited(text) => {
			state.question = text;
			(state, None)
		}
		QueryEvent::Submitted => {
			if !state.can_submit() {
				return (state, None);
			}
			state.last_id = state.last_id.wrapping_add(1);
			let id = state.last_id;
			state.status = QueryStatus::Pending;
			state.result = None;
			state.failure = None;
			state.in_flight = Some(id);
			let request = QueryRequest {
				id,
				question: state.question.clone(),
			};
			(state, Some(request))
		}
		QueryEvent::Completed { id, outcome } => {
			if state.in_flight != Some(id) {
				return (state, None);
			}
			state.in_flight = None;
			match outcome {
				Ok(result) => {
					state.status = QueryStatus::Succeeded;
					state.result = Some(result);
				}
				Err(failure) => {
					state.status = QueryStatus::Failed;
					state.result = None;
					state.failure = Some(failure.detail().to_string());
				}
			}
			(state, None)
		}
	}
}

/// Store that owns a [`QueryState`] and applies events to it.
#[derive(Debug, Default)]
pub struct QueryForm {
	state: QueryState,
}

impl QueryForm {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Start with a pre-filled question.
	#[must_use]
	pub fn with_question(question: impl Into<String>) -> Self {
		let mut form = Self::new();
		form.update_question(question);
		form
	}

	#[must_use]
	pub fn state(&self) -> &QueryState {
		&self.state
	}

	#[must_use]
	pub fn status(&self) -> QueryStatus {
		self.state.status
	}

	#[must_use]
	pub fn question(&self) -> &str {
		self.state.question()
	}

	#[must_use]
	pub fn result(&self) -> Option<&QueryResult> {
		self.state.result()
	}

	#[must_use]
	pub fn failure(&self) -> Option<&str> {
		self.state.failure()
	}

	/// Replace the question text.
	pub fn update_question(&mut self, text: impl Into<String>) {
		self.apply(QueryEvent::QuestionEdited(text.into()));
	}

	/// Try to submit the current question.
	///
	/// Returns the request to dispatch, or `None` when the question is blank
	/// or a request is already outstanding.
	pub fn submit(&mut self) -> Option<QueryRequest> {
		let request = self.apply(QueryEvent::Submitted);
		match &request {
			Some(request) => debug!(
				id = request.id,
				chars = request.question.chars().count(),
				"submission accepted"
			),
			None => debug!(status = ?self.state.status, "submission ignored"),
		}
		request
	}

	/// Record the outcome of request `id`.
	pub fn complete(&mut self, id: u64, outcome: Result<QueryResult, RequestFailed>) {
		if self.state.in_flight != Some(id) {
			debug!(id, "ignoring completion for a request that is not outstanding");
			return;
		}
		if let Err(failure) = &outcome {
			error!(id, error = %failure, "query request failed");
		}
		self.apply(QueryEvent::Completed { id, outcome });
	}

	/// Submit and wait for `service` to answer on the current thread.
	///
	/// Returns the resulting status; a rejected submission leaves it unchanged.
	pub fn submit_with(&mut self, service: &dyn QueryService) -> QueryStatus {
		if let Some(request) = self.submit() {
			let outcome = service.ask(&request.question);
			self.complete(request.id, outcome);
		}
		self.status()
	}

	fn apply(&mut self, event: QueryEvent) -> Option<QueryRequest> {
		let state = std::mem::take(&mut self.state);
		let (next, request) = transition(state, event);
		self.state = next;
		request
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use super::*;
	use crate::model::VerseInsight;

	fn dharma_result() -> QueryResult {
		QueryResult::new(vec![VerseInsight::new(
			"2.47",
			"karmaṇy evādhikāras te",
			"You have a right to perform your prescribed duties...",
			"This verse teaches...",
		)])
	}

	/// Records every question it is asked and replies with a canned outcome.
	struct ScriptedService {
		outcome: Result<QueryResult, RequestFailed>,
		asked: Mutex<Vec<String>>,
	}

	impl ScriptedService {
		fn new(outcome: Result<QueryResult, RequestFailed>) -> Self {
			Self {
				outcome,
				asked: Mutex::new(Vec::new()),
			}
		}

		fn asked(&self) -> Vec<String> {
			self.asked.lock().unwrap().clone()
		}
	}

	impl QueryService for ScriptedService {
		fn ask(&self, question: &str) -> Result<QueryResult, RequestFailed> {
			self.asked.lock().unwrap().push(question.to_string());
			self.outcome.clone()
		}
	}

	#[test]
	fn blank_question_is_not_submitted() {
		for text in ["", "   ", "\n\t"] {
			let mut form = QueryForm::with_question(text);
			assert_eq!(form.submit(), None);
			assert_eq!(form.status(), QueryStatus::Idle);
		}
	}

	#[test]
	fn submit_moves_to_pending_with_one_request() {
		let mut form = QueryForm::with_question("What is dharma?");

		let request = form.submit().expect("request");

		assert_eq!(request.question, "What is dharma?");
		assert_eq!(form.status(), QueryStatus::Pending);
		assert_eq!(form.state().in_flight(), Some(request.id));
	}

	#[test]
	fn submit_while_pending_is_rejected() {
		let mut form = QueryForm::with_question("What is dharma?");
		let first = form.submit().expect("first request");

		assert_eq!(form.submit(), None);
		assert_eq!(form.submit(), None);
		assert_eq!(form.state().in_flight(), Some(first.id));
	}

	#[test]
	fn success_stores_result() {
		let mut form = QueryForm::with_question("What is dharma?");
		let request = form.submit().unwrap();

		form.complete(request.id, Ok(dharma_result()));

		assert_eq!(form.status(), QueryStatus::Succeeded);
		assert_eq!(form.result(), Some(&dharma_result()));
		assert_eq!(form.state().in_flight(), None);
	}

	#[test]
	fn failure_leaves_result_absent() {
		let mut form = QueryForm::with_question("What is dharma?");
		let request = form.submit().unwrap();

		form.complete(request.id, Err(RequestFailed::new("HTTP 500")));

		assert_eq!(form.status(), QueryStatus::Failed);
		assert_eq!(form.result(), None);
		assert_eq!(form.failure(), Some("HTTP 500"));
	}

	#[test]
	fn resubmitting_discards_previous_result() {
		let mut form = QueryForm::with_question("What is dharma?");
		let first = form.submit().unwrap();
		form.complete(first.id, Ok(dharma_result()));

		form.update_question("What is karma?");
		let second = form.submit().expect("second request");

		assert_ne!(first.id, second.id);
		assert_eq!(second.question, "What is karma?");
		assert_eq!(form.status(), QueryStatus::Pending);
		assert_eq!(form.result(), None);
	}

	#[test]
	fn retry_after_failure_is_allowed() {
		let mut form = QueryForm::with_question("What is dharma?");
		let first = form.submit().unwrap();
		form.complete(first.id, Err(RequestFailed::new("connection refused")));

		let retry = form.submit().expect("retry request");

		assert_eq!(form.status(), QueryStatus::Pending);
		assert_eq!(form.failure(), None);
		assert_eq!(retry.question, "What is dharma?");
	}

	#[test]
	fn unknown_completion_is_ignored() {
		let mut form = QueryForm::with_question("What is dharma?");
		let request = form.submit().unwrap();

		form.complete(request.id + 1, Ok(dharma_result()));
		assert_eq!(form.status(), QueryStatus::Pending);

		form.complete(request.id, Err(RequestFailed::new("boom")));
		form.complete(request.id, Ok(dharma_result()));
		assert_eq!(form.status(), QueryStatus::Failed);
		assert_eq!(form.result(), None);
	}

	#[test]
	fn editing_does_not_touch_status_or_result() {
		let mut form = QueryForm::with_question("What is dharma?");
		let request = form.submit().unwrap();
		form.complete(request.id, Ok(dharma_result()));

		form.update_question("");

		assert_eq!(form.status(), QueryStatus::Succeeded);
		assert!(form.result().is_some());
	}

	#[test]
	fn transition_is_pure() {
		let state = QueryState::default();
		let (edited, request) = transition(state.clone(), QueryEvent::QuestionEdited("Why act?".into()));
		assert_eq!(request, None);
		assert_eq!(state, QueryState::default());

		let (pending, request) = transition(edited.clone(), QueryEvent::Submitted);
		assert_eq!(edited.status(), QueryStatus::Idle);
		assert_eq!(pending.status(), QueryStatus::Pending);
		assert_eq!(request.map(|r| r.question), Some("Why act?".to_string()));
	}

	#[test]
	fn submit_with_asks_the_service_once() {
		let service = ScriptedService::new(Ok(dharma_result()));
		let mut form = QueryForm::with_question("What is dharma?");

		let status = form.submit_with(&service);

		assert_eq!(status, QueryStatus::Succeeded);
		assert_eq!(service.asked(), ["What is dharma?"]);
	}

	#[test]
	fn submit_with_blank_question_never_calls_the_service() {
		let service = ScriptedService::new(Ok(dharma_result()));
		let mut form = QueryForm::new();

		assert_eq!(form.submit_with(&service), QueryStatus::Idle);
		assert!(service.asked().is_empty());
	}
}
