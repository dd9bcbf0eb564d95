//! Reel Player - Command Line
//!
//! Configuration, logging setup, and the interactive command loop for the
//! `reel` binary. All player behaviour lives in `reel-player`; this crate
//! only moves lines between the terminal and the facade.

pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use config::{CliConfig, OutputFormat};
pub use error::{CliError, Result};
pub use output::Console;
