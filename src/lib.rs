//! # Roster
//!
//! Lookup and aggregation queries over a flat, pipe-delimited school roster.
//!
//! Each line of the roster file holds five `|`-separated fields:
//! `first_name|last_name|house|advisor|cohort_marker`. Ghosts carry the
//! marker `G`, instructors `I`, and neither has a house.
//!
//! ## Usage
//!
//! ```bash
//! roster students --cohort "Fall 2015"
//! roster housemates "Hermione Granger" --data cohort_data.txt
//! ```
//!
//! ```no_run
//! # fn main() -> roster::Result<()> {
//! let cohort = roster::cohort_for("cohort_data.txt", "Harry Potter")?;
//! assert_eq!(cohort.as_deref(), Some("Fall 2015"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - `record` - Named-field roster records and their membership kind
//! - `reader` - The single line-to-record parsing step and file loading
//! - `house` - The fixed order of the seven roster buckets
//! - `query` - The roster queries; every call re-reads the file
//! - `config` - `roster.toml` and environment configuration
//! - `cli` - Command-line argument model and output rendering
pub mod cli;
pub mod config;
pub mod error;
pub mod house;
pub mod query;
pub mod reader;
pub mod record;

pub use error::{Result, RosterError};
pub use house::Bucket;
pub use query::{
    all_records, cohort_for, duplicated_last_names, housemates_for, list_houses, list_students,
    rosters_by_house, Rosters,
};
pub use record::{Membership, Record, RecordSummary};
