//! Error types for the verse service.
//!
//! A submission either succeeds or fails with [`RequestFailed`]; transport
//! errors, HTTP status failures, and undecodable bodies all map to
//! that single kind. Only the diagnostic text differs.

use reqwest::StatusCode;
use thiserror::Error;

/// Longest body excerpt kept in a status diagnostic.
const SNIPPET_CHARS: usize = 240;

/// The only failure a submission can end with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("request failed: {detail}")]
pub struct RequestFailed {
	detail: String,
}

impl RequestFailed {
	/// Build a failure from a free-form diagnostic.
	pub fn new(detail: impl Into<String>) -> Self {
		Self {
			detail: detail.into(),
		}
	}

	/// Network, connect, or timeout error reported by the HTTP client.
	pub fn transport(err: &reqwest::Error) -> Self {
		if err.is_timeout() {
			Self::new(format!("timed out: {err}"))
		} else {
			Self::new(format!("transport error: {err}"))
		}
	}

	/// Non-2xx response. The body is trimmed to a short excerpt.
	pub fn status(status: StatusCode, url: &str, body: &str) -> Self {
		let snippet = body.chars().take(SNIPPET_CHARS).collect::<String>();
		Self::new(format!("HTTP {status} from {url}: {snippet}"))
	}

	/// Response body could not be decoded as a verse list.
	pub fn decode(reason: impl std::fmt::Display) -> Self {
		Self::new(format!("malformed response: {reason}"))
	}

	/// Diagnostic text without the leading `request failed:` prefix.
	#[must_use]
	pub fn detail(&self) -> &str {
		&self.detail
	}
}

/// Errors raised while constructing an [`crate::HttpQueryService`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ServiceSetupError {
	/// Base URL lacks an `http://`/`https://` scheme or a host after it.
	#[error("invalid API base URL `{0}`: must be http:// or https:// followed by a host")]
	InvalidBaseUrl(String),

	/// The HTTP client could not be built.
	#[error("failed to build HTTP client: {0}")]
	Client(#[from] reqwest::Error),
}
