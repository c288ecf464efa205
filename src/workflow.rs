use std::sync::Arc;

use anyhow::{Context, Result, bail};
use gita_ask_core::{HttpQueryService, QueryForm, QueryService, QueryStatus, ResultView};
use gita_ask_tui::App;
use tracing::info;

use crate::cli::{OutputFormat, print_json, print_plain};
use crate::settings::ResolvedConfig;

/// Runs either the interactive form or a single question.
pub(crate) struct AskWorkflow {
	service: Arc<dyn QueryService>,
	config: ResolvedConfig,
}

impl AskWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let service = HttpQueryService::new(config.service.clone())
			.with_context(|| format!("cannot use service URL '{}'", config.service.base_url))?;
		info!(url = service.ask_url(), "verse service configured");
		Ok(Self {
			service: Arc::new(service),
			config,
		})
	}

	pub(crate) fn run(self, format: OutputFormat) -> Result<()> {
		match self.config.question.clone() {
			Some(question) => self.ask_once(&question, format),
			None => self.run_interactive(),
		}
	}

	fn run_interactive(self) -> Result<()> {
		let Self { service, config } = self;
		let mut app = App::new(service);
		app.set_labels(config.labels);
		app.set_theme(config.theme);
		app.set_show_sanskrit(config.show_sanskrit);

		info!("interactive session started");
		gita_ask_tui::run(app)
	}

	/// Submit one question on this thread and print the verses.
	fn ask_once(&self, question: &str, format: OutputFormat) -> Result<()> {
		let mut form = QueryForm::with_question(question);
		let view = ResultView::new(self.config.show_sanskrit);

		match form.submit_with(self.service.as_ref()) {
			QueryStatus::Succeeded => {
				let blocks = view.render(form.result());
				match format {
					OutputFormat::Plain => print_plain(&blocks),
					OutputFormat::Json => print_json(question, &blocks)?,
				}
				Ok(())
			}
			QueryStatus::Failed => {
				let detail = form.failure().unwrap_or("unknown error");
				bail!("request failed: {detail}")
			}
			QueryStatus::Idle | QueryStatus::Pending => {
				bail!("the question is empty; nothing was asked")
			}
		}
	}
}
