mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::parse_cli;
use logging::{LogConfig, init_logging};
use workflow::AskWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in gita_ask_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	init_logging(
		&LogConfig::default()
			.with_level(resolved.log_level)
			.with_log_file(resolved.log_file.clone()),
	)?;

	let workflow = AskWorkflow::from_config(resolved)?;
	workflow.run(cli.output)
}
