//! Fugen CLI library
//!
//! This library provides the command-line interface for the fugen
//! German compound decomposition engine.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
