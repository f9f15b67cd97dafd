//! Roster record types
//!
//! A [`Record`] is one line of the roster file with its five fields named.
//! Whether a person is a student, a ghost or an instructor is derived from
//! the cohort marker via [`Record::membership`].

use serde::{Deserialize, Serialize};

/// Cohort marker carried by ghosts.
pub const GHOST_MARKER: &str = "G";
/// Cohort marker carried by instructors.
pub const INSTRUCTOR_MARKER: &str = "I";
/// Cohort filter value that selects every enrolled student.
pub const ALL_COHORTS: &str = "All";

/// One parsed roster line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    /// Empty for ghosts and instructors.
    pub house: String,
    pub advisor: String,
    /// A cohort label such as `Fall 2015`, or [`GHOST_MARKER`] / [`INSTRUCTOR_MARKER`].
    pub cohort_marker: String,
}

/// What kind of person a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Membership {
    Student,
    Ghost,
    Instructor,
}

impl Record {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn membership(&self) -> Membership {
        match self.cohort_marker.as_str() {
            GHOST_MARKER => Membership::Ghost,
            INSTRUCTOR_MARKER => Membership::Instructor,
            _ => Membership::Student,
        }
    }

    pub fn is_student(&self) -> bool {
        self.membership() == Membership::Student
    }

    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            full_name: self.full_name(),
            house: self.house.clone(),
            advisor: self.advisor.clone(),
            cohort: self.cohort_marker.clone(),
        }
    }
}

/// The `(full_name, house, advisor, cohort_marker)` view of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub full_name: String,
    pub house: String,
    pub advisor: String,
    pub cohort: String,
}

impl RecordSummary {
    /// Text after the final space of the full name.
    pub fn last_name(&self) -> &str {
        self.full_name
            .rsplit(' ')
            .next()
            .unwrap_or(self.full_name.as_str())
    }

    pub fn into_tuple(self) -> (String, String, String, String) {
        (self.full_name, self.house, self.advisor, self.cohort)
    }
}
