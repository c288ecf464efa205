//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Interactive sessions own the terminal, so their events go to a log file.
//! One-shot runs log to stderr, leaving stdout for the answer.
//!
//! # Log Levels
//!
//! - `error`: failed requests
//! - `info`: responses received, session start and end
//! - `debug`: submissions, dispatch, ignored completions

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Crates whose events follow the configured level; everything else stays at `warn`.
const OWN_TARGETS: &[&str] = &["gita_ask", "gita_ask_core", "gita_ask_tui"];

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LogConfig {
	pub(crate) level: Level,
	/// Append to this file instead of writing to stderr.
	pub(crate) log_file: Option<PathBuf>,
	pub(crate) with_ansi: bool,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			level: Level::INFO,
			log_file: None,
			with_ansi: true,
		}
	}
}

impl LogConfig {
	#[must_use]
	pub(crate) fn with_level(mut self, level: Level) -> Self {
		self.level = level;
		self
	}

	/// Write to `path` (stderr when `None`). Files never get ANSI colors.
	#[must_use]
	pub(crate) fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
		self.with_ansi = path.is_none();
		self.log_file = path;
		self
	}
}

/// Map `-v` occurrences onto a level, starting from `base`.
pub(crate) fn level_for_verbosity(base: Level, verbosity: u8) -> Level {
	match verbosity {
		0 => base,
		1 => base.max(Level::DEBUG),
		_ => Level::TRACE,
	}
}

/// Install the global subscriber. Call once at startup.
pub(crate) fn init_logging(config: &LogConfig) -> Result<()> {
	match &config.log_file {
		Some(path) => {
			if let Some(parent) = path.parent()
				&& !parent.as_os_str().is_empty()
			{
				fs::create_dir_all(parent).with_context(|| {
					format!("failed to create log directory {}", parent.display())
				})?;
			}
			let file = OpenOptions::new()
				.create(true)
				.append(true)
				.open(path)
				.with_context(|| format!("failed to open log file {}", path.display()))?;
			init_with_writer(config, SharedFileWriter::new(file))
		}
		None => init_with_writer(config, io::stderr),
	}
}

fn init_with_writer<W>(config: &LogConfig, writer: W) -> Result<()>
where
	W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
	let layer = fmt::layer()
		.with_writer(writer)
		.with_ansi(config.with_ansi)
		.with_target(false);

	tracing_subscriber::registry()
		.with(build_env_filter(config.level))
		.with(layer)
		.try_init()
		.context("failed to install the tracing subscriber")
}

/// `RUST_LOG` wins over the configured level.
fn build_env_filter(level: Level) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

fn default_directives(level: Level) -> String {
	let level = level.as_str().to_lowercase();
	let mut directives = String::from("warn");
	for target in OWN_TARGETS {
		directives.push_str(&format!(",{target}={level}"));
	}
	directives
}

#[derive(Clone)]
struct SharedFileWriter {
	file: Arc<Mutex<fs::File>>,
}

impl SharedFileWriter {
	fn new(file: fs::File) -> Self {
		Self {
			file: Arc::new(Mutex::new(file)),
		}
	}
}

struct SharedFileGuard {
	file: Arc<Mutex<fs::File>>,
}

impl Write for SharedFileGuard {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let mut guard = self
			.file
			.lock()
			.map_err(|_| io::Error::other("log file lock poisoned"))?;
		guard.write(buf)
	}

	fn flush(&mut self) -> io::Result<()> {
		let mut guard = self
			.file
			.lock()
			.map_err(|_| io::Error::other("log file lock poisoned"))?;
		guard.flush()
	}
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
	type Writer = SharedFileGuard;

	fn make_writer(&'a self) -> Self::Writer {
		SharedFileGuard {
			file: Arc::clone(&self.file),
		}
	}
}
