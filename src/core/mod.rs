//! Core application functionality
//!
//! This module contains the application plumbing around the naming code:
//! - CLI handling and user settings
//! - The batch driver over a directory of sources
//! - Running and error reporting

pub mod batch;
pub mod cli;
pub mod config_file;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use batch::{process_directory, process_font, BatchOptions, BatchPolicy, BatchSummary};
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use runner::run_app;
