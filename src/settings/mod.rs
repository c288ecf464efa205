//! Configuration loading and resolution.
//!
//! `load` is the entry point: it layers config files, `GITA_ASK__*`
//! environment variables, and CLI flags, then returns a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
