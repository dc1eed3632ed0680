//! Command Line Interface (CLI) layer for bgstrip.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-file and batch flows.
//! It merges flags over an optional JSON config and hands the result to
//! `bgstrip::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
