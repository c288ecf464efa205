//! Visual styling utilities.
//!
//! Themes are plain `const` palettes; [`StyleConfig`] is the container the
//! [`crate::App`] renders with.

/// Theme definitions and lookup by name.
pub mod theme;

pub use theme::{Theme, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
