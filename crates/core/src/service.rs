//! Client for the verse service.
//!
//! [`QueryService`] is the seam between the form and its backend; the UI and
//! tests only see the trait. [`HttpQueryService`] is the production
//! implementation:
//!
//! - `POST {base_url}/api/gita` with body `{ "question": <string> }`
//! - `2xx` with `{ "verses": [...] }` decodes into a [`QueryResult`]
//! - anything else becomes [`RequestFailed`]

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info, instrument};

use crate::error::{RequestFailed, ServiceSetupError};
use crate::model::{AskRequest, QueryResult};

/// Path of the ask endpoint relative to the configured base URL.
pub const ASK_PATH: &str = "/api/gita";

/// Backend collaborator that answers one question with a list of verses.
pub trait QueryService: Send + Sync {
	/// Ask `question` and wait for the complete response.
	fn ask(&self, question: &str) -> Result<QueryResult, RequestFailed>;
}

/// Transport settings for [`HttpQueryService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
	/// Base URL of the service, e.g. `http://127.0.0.1:5000`.
	pub base_url: String,
	/// Whole-request timeout. `None` keeps the HTTP client's default.
	pub timeout: Option<Duration>,
}

impl ServiceConfig {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			timeout: None,
		}
	}

	#[must_use]
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}
}

/// Blocking HTTP implementation of [`QueryService`].
#[derive(Debug, Clone)]
pub struct HttpQueryService {
	client: Client,
	ask_url: String,
}

impl HttpQueryService {
	/// Validate the base URL and build the underlying HTTP client.
	///
	/// # Errors
	/// - [`ServiceSetupError::InvalidBaseUrl`] when the URL has no HTTP scheme or nothing after it
	/// - [`ServiceSetupError::Client`] when the HTTP client cannot be built
	pub fn new(config: ServiceConfig) -> Result<Self, ServiceSetupError> {
		let base = config.base_url.trim();
		let has_host = authority(base).is_some_and(|rest| !rest.trim_end_matches('/').is_empty());
		if !has_host {
			return Err(ServiceSetupError::InvalidBaseUrl(config.base_url));
		}

		let mut builder = Client::builder();
		if let Some(timeout) = config.timeout {
			builder = builder.timeout(timeout);
		}
		let client = builder.build()?;

		let ask_url = format!("{}{ASK_PATH}", base.trim_end_matches('/'));
		Ok(Self { client, ask_url })
	}

	/// Fully resolved URL of the ask endpoint.
	#[must_use]
	pub fn ask_url(&self) -> &str {
		&self.ask_url
	}
}

impl QueryService for HttpQueryService {
	#[instrument(skip_all, fields(url = %self.ask_url))]
	fn ask(&self, question: &str) -> Result<QueryResult, RequestFailed> {
		debug!("POST {}", self.ask_url);
		let response = self
			.client
			.post(&self.ask_url)
			.json(&AskRequest { question })
			.send()
			.map_err(|err| RequestFailed::transport(&err))?;

		let status = response.status();
		let body = response
			.text()
			.map_err(|err| RequestFailed::transport(&err))?;

		if !status.is_success() {
			return Err(RequestFailed::status(status, &self.ask_url, &body));
		}

		let result: QueryResult = serde_json::from_str(&body).map_err(RequestFailed::decode)?;
		info!(verses = result.len(), "received verses");
		Ok(result)
	}
}

/// Everything after an `http://` or `https://` scheme, matched ignoring case.
fn authority(base: &str) -> Option<&str> {
	["http://", "https://"].into_iter().find_map(|scheme| {
		let head = base.get(..scheme.len())?;
		head.eq_ignore_ascii_case(scheme).then(|| &base[scheme.len()..])
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ask_url_joins_base_and_path() {
		let service = HttpQueryService::new(ServiceConfig::new("http://localhost:5000/")).unwrap();
		assert_eq!(service.ask_url(), "http://localhost:5000/api/gita");
	}

	#[test]
	fn scheme_is_matched_ignoring_case() {
		let service = HttpQueryService::new(ServiceConfig::new("HTTPS://Example.com")).unwrap();
		assert_eq!(service.ask_url(), "HTTPS://Example.com/api/gita");
	}

	#[test]
	fn base_url_requires_http_scheme() {
		for base in [
			"",
			"   ",
			"localhost:5000",
			"ftp://example.com",
			"http://",
			"https:///",
		] {
			let err = HttpQueryService::new(ServiceConfig::new(base)).unwrap_err();
			assert!(
				matches!(err, ServiceSetupError::InvalidBaseUrl(_)),
				"expected {base:?} to be rejected"
			);
		}
	}
}
