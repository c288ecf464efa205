//! Core application state and behavior for the question form.
//!
//! The [`App`] type aggregates the query form, the result view, and the UI
//! state. Supporting modules partition the implementation into focused
//! pieces: actions (input handling), rendering, and query coordination.

mod actions;
mod query;
mod render;
mod state;

pub(crate) use query::QueryRuntime;
pub use state::App;
