//! Background dispatch worker.
//!
//! The UI thread owns the [`crate::QueryForm`] and must never block on the
//! network. Requests are handed to a worker thread over a channel; each
//! completion comes back as a [`QueryCompletion`] message that the owner feeds
//! into [`crate::QueryForm::complete`].

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::debug;

use crate::error::RequestFailed;
use crate::form::QueryRequest;
use crate::model::QueryResult;
use crate::service::QueryService;

/// Commands understood by the dispatch worker.
#[derive(Debug)]
pub enum DispatchCommand {
	/// Ask the service and report back with the request's id.
	Ask(QueryRequest),
	/// Stop the worker thread.
	Shutdown,
}

/// Outcome of one dispatched request.
#[derive(Debug)]
pub struct QueryCompletion {
	/// Identifier of the [`QueryRequest`] that produced this outcome.
	pub id: u64,
	pub outcome: Result<QueryResult, RequestFailed>,
}

/// Launch the worker thread and return its command and completion channels.
pub fn spawn(
	service: Arc<dyn QueryService>,
) -> (Sender<DispatchCommand>, Receiver<QueryCompletion>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (completion_tx, completion_rx) = mpsc::channel();

	thread::spawn(move || worker_loop(service.as_ref(), command_rx, completion_tx));

	(command_tx, completion_rx)
}

fn worker_loop(
	service: &dyn QueryService,
	command_rx: Receiver<DispatchCommand>,
	completion_tx: Sender<QueryCompletion>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(service, &completion_tx, command) {
			break;
		}
	}
	debug!("dispatch worker stopped");
}

fn handle_command(
	service: &dyn QueryService,
	completion_tx: &Sender<QueryCompletion>,
	command: DispatchCommand,
) -> bool {
	match command {
		DispatchCommand::Ask(QueryRequest { id, question }) => {
			debug!(id, "dispatching request");
			let outcome = service.ask(&question);
			completion_tx.send(QueryCompletion { id, outcome }).is_ok()
		}
		DispatchCommand::Shutdown => false,
	}
}
