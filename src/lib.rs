//! Love Journey
//!
//! Command line shell around the wizard: configuration, tracing bootstrap,
//! dependency wiring and the commands.

pub mod bootstrap;
pub mod cli;

pub use cli::{Cli, Commands};
