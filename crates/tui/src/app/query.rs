//! Query coordination with the background dispatch worker.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use gita_ask_core::dispatch::{self, DispatchCommand, QueryCompletion};
use gita_ask_core::{QueryRequest, QueryService, RequestFailed};
use tracing::warn;

use crate::app::state::App;

pub(crate) struct QueryRuntime {
	tx: Sender<DispatchCommand>,
	rx: Receiver<QueryCompletion>,
}

impl QueryRuntime {
	pub(crate) fn spawn(service: Arc<dyn QueryService>) -> Self {
		let (tx, rx) = dispatch::spawn(service);
		Self { tx, rx }
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(DispatchCommand::Shutdown);
	}

	/// Hand a request to the worker. Returns `false` if the worker is gone.
	pub(crate) fn dispatch(&self, request: QueryRequest) -> bool {
		self.tx.send(DispatchCommand::Ask(request)).is_ok()
	}

	pub(crate) fn try_recv(&self) -> Result<QueryCompletion, TryRecvError> {
		self.rx.try_recv()
	}
}

impl App<'_> {
	/// Submit the current question if the form accepts it.
	pub(crate) fn submit_question(&mut self) {
		self.form.update_question(self.question_input.text());
		let Some(request) = self.form.submit() else {
			return;
		};
		let id = request.id;
		self.results_scroll = 0;
		if !self.queries.dispatch(request) {
			warn!(id, "dispatch worker is not running");
			self.form
				.complete(id, Err(RequestFailed::new("dispatch worker is not running")));
		}
	}

	/// Drain completions waiting on the receiver channel.
	pub(crate) fn pump_query_results(&mut self) {
		loop {
			match self.queries.try_recv() {
				Ok(QueryCompletion { id, outcome }) => {
					self.form.complete(id, outcome);
					self.results_scroll = 0;
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					if let Some(id) = self.form.state().in_flight() {
						self.form
							.complete(id, Err(RequestFailed::new("dispatch worker stopped")));
					}
					break;
				}
			}
		}
	}
}
