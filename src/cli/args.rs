use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum};

use super::annotations::dim_cli_annotations;
use crate::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("gita-ask {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Magenta.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = tinted_cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn tinted_cli_command() -> Command {
	CliArgs::command().mut_args(dim_cli_annotations)
}

#[derive(Parser, Debug)]
#[command(
	name = "gita-ask",
	version,
	long_version = long_version(),
	about = "Ask the Bhagavad Gita a question and read the verses it answers with",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `gita-ask` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "GITA_ASK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'u',
		long = "api-url",
		value_name = "URL",
		env = "GITA_API_URL",
		help = "Base URL of the verse service (default: [api] base_url)"
	)]
	pub(crate) api_url: Option<String>,
	#[arg(
		long,
		value_name = "SECS",
		help = "Whole-request timeout in seconds (default: 120)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		short = 'q',
		long,
		value_name = "TEXT",
		help = "Ask once, print the verses and exit (default: interactive)"
	)]
	pub(crate) question: Option<String>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "How one-shot answers are printed"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "hide-sanskrit",
		help = "Start with the Sanskrit text hidden (default: shown)"
	)]
	pub(crate) hide_sanskrit: bool,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: saffron)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Heading shown above the question (default: Ask the Bhagavad Gita)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "print-config",
		help = "Print the effective configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(long = "list-themes", help = "List the available themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Raise the log level; repeat for more detail"
	)]
	pub(crate) verbose: u8,
}

/// Output format for one-shot answers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(args: &[&str]) -> CliArgs {
		let mut matches = CliArgs::command()
			.try_get_matches_from(args)
			.expect("arguments parse");
		CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
	}

	#[test]
	fn command_supports_custom_styles() {
		let command = tinted_cli_command();
		assert!(command.get_about().is_some());
		command.debug_assert();
	}

	#[test]
	fn defaults_start_interactive_plain() {
		let parsed = parse(&["gita-ask"]);
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert_eq!(parsed.question, None);
		assert!(!parsed.hide_sanskrit);
		assert_eq!(parsed.verbose, 0);
	}

	#[test]
	fn one_shot_flags_parse() {
		let parsed = parse(&[
			"gita-ask",
			"-u",
			"http://127.0.0.1:5000",
			"-q",
			"What is dharma?",
			"-o",
			"json",
			"--hide-sanskrit",
			"-vv",
			"-c",
			"a.toml",
			"-c",
			"b.toml",
		]);
		assert_eq!(parsed.api_url.as_deref(), Some("http://127.0.0.1:5000"));
		assert_eq!(parsed.question.as_deref(), Some("What is dharma?"));
		assert_eq!(parsed.output, OutputFormat::Json);
		assert!(parsed.hide_sanskrit);
		assert_eq!(parsed.verbose, 2);
		assert_eq!(
			parsed.config,
			vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
		);
	}
}
