use std::path::PathBuf;

use gita_ask_core::ServiceConfig;
use gita_ask_tui::{Theme, UiLabels};
use tracing::Level;

/// Application-ready configuration derived from CLI input, config files and
/// defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) service: ServiceConfig,
	/// Present in one-shot mode.
	pub(crate) question: Option<String>,
	pub(crate) labels: UiLabels,
	pub(crate) theme_name: String,
	pub(crate) theme: Theme,
	pub(crate) show_sanskrit: bool,
	pub(crate) log_level: Level,
	/// `None` logs to stderr.
	pub(crate) log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		print!("{}", self.summary());
	}

	fn summary(&self) -> String {
		let mut lines = vec![
			"Effective configuration:".to_string(),
			format!("  Service URL: {}", self.service.base_url),
		];
		match self.service.timeout {
			Some(timeout) => lines.push(format!("  Timeout: {}s", timeout.as_secs())),
			None => lines.push("  Timeout: client default".to_string()),
		}
		lines.push(format!(
			"  Mode: {}",
			if self.question.is_some() { "one-shot" } else { "interactive" }
		));
		lines.push(format!("  Title: {}", self.labels.title));
		lines.push(format!("  Theme: {}", self.theme_name));
		lines.push(format!("  Show Sanskrit: {}", bool_to_word(self.show_sanskrit)));
		lines.push(format!("  Log level: {}", self.log_level));
		lines.push(format!(
			"  Log output: {}",
			self.log_file
				.as_ref()
				.map_or_else(|| "stderr".to_string(), |path| path.display().to_string())
		));
		let mut text = lines.join("\n");
		text.push('\n');
		text
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
