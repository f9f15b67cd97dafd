//! CLI command handlers
//!
//! This module contains the command-line surface of `roster`:
//! - Argument parsing structures
//! - Command routing onto the query functions
//! - Text and JSON rendering of results

pub mod args;
pub mod help;
pub mod output;
pub mod router;

pub use args::{Cli, Commands};
pub use help::get_log_level;
pub use router::execute_command;
