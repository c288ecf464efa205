//! Rendering components for the question form and the verse panel.

mod prompt;
mod verses;

pub use prompt::{InputContext, StatusContext, render_input, render_status};
pub use verses::{VersePanel, render_verses, verse_lines};
