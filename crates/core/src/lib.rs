//! Core crate for the `gita-ask` client.
//!
//! The crate is independent of any terminal or UI toolkit. It provides the
//! wire model returned by the verse service, the [`QueryForm`] state machine
//! that drives one request per submission, the [`ResultView`] projection
//! used by renderers, and the [`QueryService`] seam with its HTTP
//! implementation.

pub mod dispatch;
pub mod error;
pub mod form;
pub mod model;
pub mod service;
pub mod view;

pub use crate::error::{RequestFailed, ServiceSetupError};
pub use crate::form::{QueryEvent, QueryForm, QueryRequest, QueryState, QueryStatus, transition};
pub use crate::model::{AskRequest, QueryResult, VerseInsight, VerseNumber};
pub use crate::service::{ASK_PATH, HttpQueryService, QueryService, ServiceConfig};
pub use crate::view::{ResultView, VerseBlock};
