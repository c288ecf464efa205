use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};

use crate::app_dirs;
use crate::cli::CliArgs;

/// Build a [`Config`] from the default locations, `--config` files, and the
/// `GITA_ASK__` environment.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	build_config_with_env(cli, environment())
}

// Single-underscore names (GITA_ASK_CONFIG, GITA_ASK_DATA_DIR) are not config keys.
fn environment() -> Environment {
	Environment::with_prefix("gita_ask")
		.prefix_separator("__")
		.separator("__")
		.try_parsing(true)
}

fn build_config_with_env(cli: &CliArgs, env: Environment) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(env);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Default configuration file locations, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".gita-ask.toml"));
		files.push(current_dir.join("gita-ask.toml"));
	}

	files
}
