//! Rendering of query results for the terminal.
//!
//! Text output is one item per line so it pipes cleanly into other tools.
//! JSON output is pretty-printed `serde_json`.

use crate::config::OutputFormat;
use crate::error::{Result, RosterError};
use crate::query::Rosters;
use crate::record::RecordSummary;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct RosterView<'a> {
    house: &'static str,
    names: &'a [String],
}

fn io_err(e: std::io::Error) -> RosterError {
    RosterError::io("<output>", e)
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out).map_err(io_err)
}

/// Any list or set of names.
pub fn write_names<'a, W, I>(out: &mut W, format: OutputFormat, names: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a String>,
{
    let names: Vec<&String> = names.into_iter().collect();
    match format {
        OutputFormat::Json => write_json(out, &names),
        OutputFormat::Text => {
            for name in names {
                writeln!(out, "{name}").map_err(io_err)?;
            }
            Ok(())
        }
    }
}

pub fn write_rosters<W: Write>(out: &mut W, format: OutputFormat, rosters: &Rosters) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let views: Vec<RosterView> = rosters
                .iter()
                .map(|(bucket, names)| RosterView {
                    house: bucket.label(),
                    names,
                })
                .collect();
            write_json(out, &views)
        }
        OutputFormat::Text => {
            for (i, (bucket, names)) in rosters.iter().enumerate() {
                if i > 0 {
                    writeln!(out).map_err(io_err)?;
                }
                writeln!(out, "{} ({}):", bucket.label(), names.len()).map_err(io_err)?;
                for name in names {
                    writeln!(out, "  {name}").map_err(io_err)?;
                }
            }
            Ok(())
        }
    }
}

pub fn write_records<W: Write>(
    out: &mut W,
    format: OutputFormat,
    records: &[RecordSummary],
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, records),
        OutputFormat::Text => {
            for r in records {
                writeln!(
                    out,
                    "{}|{}|{}|{}",
                    r.full_name, r.house, r.advisor, r.cohort
                )
                .map_err(io_err)?;
            }
            Ok(())
        }
    }
}

/// An absent cohort prints nothing in text mode and `null` in JSON.
pub fn write_cohort<W: Write>(out: &mut W, format: OutputFormat, cohort: Option<&str>) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &cohort),
        OutputFormat::Text => {
            if let Some(cohort) = cohort {
                writeln!(out, "{cohort}").map_err(io_err)?;
            }
            Ok(())
        }
    }
}
