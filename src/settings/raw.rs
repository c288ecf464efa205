use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, ensure};
use gita_ask_core::ServiceConfig;
use gita_ask_tui::{UiLabels, style};
use serde::Deserialize;
use tracing::Level;

use super::resolved::ResolvedConfig;
use crate::app_dirs;
use crate::cli::CliArgs;
use crate::logging::level_for_verbosity;

const DEFAULT_TIMEOUT_SECS: u64 = 120;
const LOG_FILE_NAME: &str = "gita-ask.log";

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	ui: UiSection,
	log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
	base_url: Option<String>,
	timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
	placeholder: Option<String>,
	show_sanskrit: Option<bool>,
	theme: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.api_url.clone() {
			self.api.base_url = Some(url);
		}
		if let Some(secs) = cli.timeout {
			self.api.timeout_secs = Some(secs);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if cli.hide_sanskrit {
			self.ui.show_sanskrit = Some(false);
		}
	}

	/// Validate and fill defaults.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let base_url = self
			.api
			.base_url
			.map(|url| url.trim().to_string())
			.filter(|url| !url.is_empty())
			.ok_or_else(|| {
				anyhow!(
					"no service URL configured; set GITA_API_URL, pass --api-url, or add [api] base_url to a config file"
				)
			})?;
		let timeout_secs = self.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
		ensure!(timeout_secs > 0, "api.timeout_secs must be at least 1");
		let service = ServiceConfig::new(base_url).with_timeout(Duration::from_secs(timeout_secs));

		let theme_name = self
			.ui
			.theme
			.unwrap_or_else(|| style::theme::DEFAULT_THEME.to_string());
		let theme = style::by_name(&theme_name).ok_or_else(|| {
			anyhow!(
				"unknown theme '{theme_name}' (available: {})",
				style::names().join(", ")
			)
		})?;

		let mut labels = UiLabels::default();
		if let Some(title) = self.ui.title {
			labels = labels.with_title(title);
		}
		if let Some(placeholder) = self.ui.placeholder {
			labels = labels.with_placeholder(placeholder);
		}

		let configured_level = match self.log.level {
			Some(level) => Level::from_str(level.trim())
				.with_context(|| format!("invalid log level '{level}'"))?,
			None => Level::INFO,
		};
		let log_level = level_for_verbosity(configured_level, cli.verbose);

		let one_shot = cli.question.is_some();
		let log_file = match self.log.file {
			Some(path) => Some(path),
			None if one_shot => None,
			None => Some(app_dirs::get_data_dir()?.join(LOG_FILE_NAME)),
		};

		Ok(ResolvedConfig {
			service,
			question: cli.question.clone(),
			labels,
			theme_name,
			theme,
			show_sanskrit: self.ui.show_sanskrit.unwrap_or(true),
			log_level,
			log_file,
		})
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;

	use super::*;
	use crate::settings::sources::build_config;

	fn raw_from_toml(text: &str) -> RawConfig {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("gita-ask.toml");
		fs::write(&path, text).expect("write config");
		let cli = CliArgs::parse_from([
			"gita-ask",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
		]);
		build_config(&cli)
			.expect("config builds")
			.try_deserialize()
			.expect("config deserializes")
	}

	fn one_shot_cli(extra: &[&str]) -> CliArgs {
		let mut args = vec!["gita-ask", "--no-config", "-q", "What is dharma?"];
		args.extend_from_slice(extra);
		CliArgs::parse_from(args)
	}

	#[test]
	fn file_values_resolve() {
		let raw = raw_from_toml(
			r#"
[api]
base_url = "http://127.0.0.1:5000"
timeout_secs = 30

[ui]
title = "Gita"
show_sanskrit = false
theme = "mono"

[log]
level = "debug"
"#,
		);
		let cli = one_shot_cli(&[]);

		let resolved = raw.resolve(&cli).expect("resolves");

		assert_eq!(resolved.service.base_url, "http://127.0.0.1:5000");
		assert_eq!(resolved.service.timeout, Some(Duration::from_secs(30)));
		assert_eq!(resolved.labels.title, "Gita");
		assert!(!resolved.show_sanskrit);
		assert_eq!(resolved.theme_name, "mono");
		assert_eq!(resolved.log_level, Level::DEBUG);
		assert_eq!(resolved.log_file, None);
	}

	#[test]
	fn cli_overrides_take_precedence() {
		let mut raw = raw_from_toml(
			r#"
[api]
base_url = "http://file.example"

[ui]
title = "From file"
"#,
		);
		let mut cli = one_shot_cli(&["--hide-sanskrit", "--theme", "MONO", "-v"]);
		cli.api_url = Some("http://cli.example".into());
		cli.title = Some("From CLI".into());
		cli.timeout = Some(5);

		raw.apply_cli_overrides(&cli);
		let resolved = raw.resolve(&cli).expect("resolves");

		assert_eq!(resolved.service.base_url, "http://cli.example");
		assert_eq!(resolved.service.timeout, Some(Duration::from_secs(5)));
		assert_eq!(resolved.labels.title, "From CLI");
		assert!(!resolved.show_sanskrit);
		assert_eq!(resolved.theme_name, "MONO");
		assert_eq!(resolved.log_level, Level::DEBUG);
	}

	#[test]
	fn missing_base_url_is_an_error() {
		let cli = one_shot_cli(&[]);

		let err = RawConfig::default().resolve(&cli).unwrap_err();

		assert!(err.to_string().contains("GITA_API_URL"));
	}

	#[test]
	fn unknown_theme_lists_choices() {
		let mut raw = RawConfig::default();
		let mut cli = one_shot_cli(&["--theme", "neon"]);
		cli.api_url = Some("http://127.0.0.1:5000".into());
		raw.apply_cli_overrides(&cli);

		let err = raw.resolve(&cli).unwrap_err();

		assert!(err.to_string().contains("saffron"));
	}

	#[test]
	fn defaults_apply() {
		let mut raw = RawConfig::default();
		let mut cli = one_shot_cli(&[]);
		cli.api_url = Some("http://127.0.0.1:5000".into());
		raw.apply_cli_overrides(&cli);

		let resolved = raw.resolve(&cli).expect("resolves");

		assert_eq!(
			resolved.service.timeout,
			Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
		);
		assert!(resolved.show_sanskrit);
		assert_eq!(resolved.theme_name, "saffron");
		assert_eq!(resolved.labels, UiLabels::default());
		assert_eq!(resolved.log_level, Level::INFO);
	}
}
