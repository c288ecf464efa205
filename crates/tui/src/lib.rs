//! Interactive terminal front-end for `gita-ask`.
//!
//! This crate contains the full TUI application: the event loop, rendering
//! pipeline, key handling, and the widgets/style definitions. All query
//! semantics live in `gita-ask-core`; the [`App`] only owns a
//! [`gita_ask_core::QueryForm`], a [`gita_ask_core::ResultView`], and the
//! channel to the background dispatch worker.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;


pub use app::App;
pub use config::UiLabels;
pub use input::QuestionInput;
pub use runtime::run;
pub use style::{StyleConfig, Theme, default_theme};
