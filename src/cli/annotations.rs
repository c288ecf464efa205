use clap::Arg;
use clap::builder::StyledStr;
use clap::builder::styling::{AnsiColor, Color, Style};

/// Dim the `(default: ...)`, possible-values and env annotations in help text.
pub(crate) fn dim_cli_annotations(mut arg: Arg) -> Arg {
	let help_text = arg
		.get_help()
		.map(ToString::to_string)
		.unwrap_or_default();
	if help_text.is_empty() {
		return arg;
	}

	let mut styled = style_base_help(&help_text);

	if let Some(annotation) = possible_values_annotation(&arg) {
		arg = arg.hide_possible_values(true);
		styled.push_str(" ");
		append_muted(&mut styled, &annotation);
	}

	if let Some(annotation) = env_annotation(&arg) {
		arg = arg.hide_env(true);
		styled.push_str(" ");
		append_muted(&mut styled, &annotation);
	}

	arg.help(styled)
}

fn muted_style() -> Style {
	Style::new()
		.fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)))
		.dimmed()
}

fn append_muted(target: &mut StyledStr, text: &str) {
	let style = muted_style();
	let _ = std::fmt::write(target, format_args!("{style}{text}{style:#}"));
}

/// Split `text` at its trailing `(default: ...)` and mute that part.
fn style_base_help(text: &str) -> StyledStr {
	let mut styled = StyledStr::new();
	match text.rfind("(default: ") {
		Some(start) if text.ends_with(')') => {
			styled.push_str(&text[..start]);
			append_muted(&mut styled, &text[start..]);
		}
		_ => styled.push_str(text),
	}
	styled
}

fn possible_values_annotation(arg: &Arg) -> Option<String> {
	if !arg.get_action().takes_values() {
		return None;
	}
	let names: Vec<String> = arg
		.get_possible_values()
		.iter()
		.filter(|value| !value.is_hide_set())
		.map(|value| value.get_name().to_string())
		.collect();
	if names.is_empty() {
		return None;
	}
	Some(format!("[possible values: {}]", names.join(", ")))
}

fn env_annotation(arg: &Arg) -> Option<String> {
	let name = arg.get_env()?.to_string_lossy();
	if name.trim().is_empty() {
		return None;
	}
	Some(format!("[env: {name}=]"))
}
