//! Command routing and execution
//!
//! Resolves the data file and output format, runs one query and renders
//! its result.

use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::config::RosterConfig;
use crate::query;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Execute the parsed command, writing results to `out`. `cwd` is where an
/// implicit `roster.toml` is looked up.
pub fn execute_command<W: Write>(cli: &Cli, cwd: &Path, out: &mut W) -> Result<()> {
    let config = RosterConfig::load(cli.config.as_deref(), cwd)
        .context("Failed to load configuration")?;
    let data = config.resolve_data_file(cli.data.as_deref());
    let format = config.resolve_format(cli.format);

    debug!(data = %data.display(), ?format, command = ?cli.command, "executing");

    match &cli.command {
        Commands::Houses => {
            let houses = query::list_houses(&data)?;
            output::write_names(out, format, &houses)?;
        }
        Commands::Students { cohort } => {
            let students = query::list_students(&data, cohort)?;
            output::write_names(out, format, &students)?;
        }
        Commands::Rosters => {
            let rosters = query::rosters_by_house(&data)?;
            output::write_rosters(out, format, &rosters)?;
        }
        Commands::Records => {
            let records = query::all_records(&data)?;
            output::write_records(out, format, &records)?;
        }
        Commands::Cohort { name } => {
            let cohort = query::cohort_for(&data, name)?;
            if cohort.is_none() {
                debug!(name = %name, "no such person");
            }
            output::write_cohort(out, format, cohort.as_deref())?;
        }
        Commands::Dupes => {
            let dupes = query::duplicated_last_names(&data)?;
            output::write_names(out, format, &dupes)?;
        }
        Commands::Housemates { name } => {
            let mates = query::housemates_for(&data, name)?;
            output::write_names(out, format, &mates)?;
        }
    }

    Ok(())
}
