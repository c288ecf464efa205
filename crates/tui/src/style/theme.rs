use ratatui::style::{Color, Modifier, Style};

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "saffron";

/// A theme containing styles for the form and the verse panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Style for the page title.
	pub header: Style,
	/// Style for the question input border and text.
	pub prompt: Style,
	/// Style for placeholders, hints, and other muted text.
	pub empty: Style,
	/// Style for verse headings.
	pub highlight: Style,
	/// Style for the Sanskrit text.
	pub secondary: Style,
	/// Style for sub-headings inside a verse block.
	pub label: Style,
	/// Style for the failure notice.
	pub error: Style,
}

impl Theme {
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Style for the toggle indicator in the given state.
	#[must_use]
	pub fn toggle_style(&self, enabled: bool) -> Style {
		if enabled {
			self.highlight
		} else {
			self.empty
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

pub const SAFFRON: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(255, 237, 213))
		.bg(Color::Rgb(124, 45, 18))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(251, 146, 60)),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Rgb(250, 204, 21))
		.add_modifier(Modifier::BOLD),
	secondary: Style::new()
		.fg(Color::Rgb(253, 186, 116))
		.add_modifier(Modifier::ITALIC),
	label: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::UNDERLINED),
	error: Style::new().fg(Color::LightRed),
};

pub const MONO: Theme = Theme {
	header: Style::new().add_modifier(Modifier::REVERSED),
	prompt: Style::new(),
	empty: Style::new().add_modifier(Modifier::DIM),
	highlight: Style::new().add_modifier(Modifier::BOLD),
	secondary: Style::new().add_modifier(Modifier::ITALIC),
	label: Style::new().add_modifier(Modifier::UNDERLINED),
	error: Style::new().add_modifier(Modifier::BOLD),
};

const BUILTINS: &[(&str, Theme)] = &[(DEFAULT_THEME, SAFFRON), ("mono", MONO)];

/// Get the default built-in theme.
#[must_use]
pub fn default_theme() -> Theme {
	SAFFRON
}

/// Look up a built-in theme, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILTINS
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name.trim()))
		.map(|(_, theme)| *theme)
}

/// Names of all built-in themes, default first.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILTINS.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_is_case_insensitive() {
		assert_eq!(by_name("MONO"), Some(MONO));
		assert_eq!(by_name(" saffron "), Some(SAFFRON));
		assert_eq!(by_name("unknown"), None);
	}

	#[test]
	fn default_is_listed_first() {
		assert_eq!(names().first(), Some(&DEFAULT_THEME));
		assert_eq!(Theme::default(), SAFFRON);
	}
}
