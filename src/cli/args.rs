//! CLI argument structures

use crate::config::OutputFormat;
use crate::record::ALL_COHORTS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query a pipe-delimited school roster
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "roster - Answer questions about a school roster file", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Roster data file (overrides ROSTER_DATA_FILE and roster.toml)
    #[arg(short = 'd', long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Configuration file (defaults to ./roster.toml when present)
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short = 'f', long, global = true, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every house that has at least one member
    Houses,

    /// List enrolled students, sorted by full name
    Students {
        /// Only students in this cohort (e.g. "Fall 2015")
        #[arg(long, default_value = ALL_COHORTS)]
        cohort: String,
    },

    /// Show the sorted rosters of every house, the ghosts and the instructors
    Rosters,

    /// Dump every record as full name, house, advisor and cohort
    Records,

    /// Print the cohort of a person
    Cohort {
        /// Full name, e.g. "Harry Potter"
        name: String,
    },

    /// List last names shared by more than one person
    Dupes,

    /// List people sharing both house and cohort with a person
    Housemates {
        /// Full name, e.g. "Hermione Granger"
        name: String,
    },
}
