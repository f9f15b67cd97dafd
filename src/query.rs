//! Roster queries
//!
//! Each public `fn(path, ..)` reads the roster file from scratch, answers
//! one question and drops the records. Nothing is cached between calls.
//! The `*_in` functions hold the logic over already-loaded records.

use crate::error::Result;
use crate::house::Bucket;
use crate::reader::load_records;
use crate::record::{Record, RecordSummary, ALL_COHORTS};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{trace, warn};

/// Sorted name lists for the seven buckets, in [`Bucket::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rosters {
    rosters: [Vec<String>; 7],
}

impl Rosters {
    pub fn get(&self, bucket: Bucket) -> &[String] {
        &self.rosters[bucket.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &[String])> {
        Bucket::ALL
            .into_iter()
            .map(move |bucket| (bucket, self.get(bucket)))
    }

    /// Always 7.
    pub fn len(&self) -> usize {
        self.rosters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rosters.iter().all(Vec::is_empty)
    }

    pub fn total_names(&self) -> usize {
        self.rosters.iter().map(Vec::len).sum()
    }

    pub fn into_vec(self) -> Vec<Vec<String>> {
        self.rosters.into()
    }
}

/// Every non-empty house value, once.
pub fn list_houses(path: impl AsRef<Path>) -> Result<BTreeSet<String>> {
    Ok(houses_in(&load_records(path)?))
}

/// Sorted full names of enrolled students in `cohort`, or of all enrolled
/// students when `cohort` is `"All"`.
pub fn list_students(path: impl AsRef<Path>, cohort: &str) -> Result<Vec<String>> {
    Ok(students_in(&load_records(path)?, cohort))
}

pub fn rosters_by_house(path: impl AsRef<Path>) -> Result<Rosters> {
    Ok(rosters_in(&load_records(path)?))
}

/// One summary per line, in file order.
pub fn all_records(path: impl AsRef<Path>) -> Result<Vec<RecordSummary>> {
    Ok(load_records(path)?.iter().map(Record::summary).collect())
}

/// Cohort marker of the first record named `full_name`, if any.
pub fn cohort_for(path: impl AsRef<Path>, full_name: &str) -> Result<Option<String>> {
    Ok(cohort_in(&all_records(path)?, full_name))
}

/// Last names seen more than once.
pub fn duplicated_last_names(path: impl AsRef<Path>) -> Result<BTreeSet<String>> {
    Ok(duplicated_last_names_in(&all_records(path)?))
}

/// Everyone sharing both house and cohort marker with `full_name`,
/// excluding that person. Empty when the name is unknown.
pub fn housemates_for(path: impl AsRef<Path>, full_name: &str) -> Result<BTreeSet<String>> {
    Ok(housemates_in(&all_records(path)?, full_name))
}

pub fn houses_in(records: &[Record]) -> BTreeSet<String> {
    records
        .iter()
        .filter(|r| !r.house.is_empty())
        .map(|r| r.house.clone())
        .collect()
}

pub fn students_in(records: &[Record], cohort: &str) -> Vec<String> {
    let mut students: Vec<String> = records
        .iter()
        .filter(|r| r.is_student())
        .filter(|r| cohort == ALL_COHORTS || r.cohort_marker == cohort)
        .map(Record::full_name)
        .collect();

    students.sort();
    trace!(cohort, count = students.len(), "students by cohort");
    students
}

pub fn rosters_in(records: &[Record]) -> Rosters {
    let mut rosters = Rosters::default();

    for record in records {
        match Bucket::for_record(record) {
            Some(bucket) => rosters.rosters[bucket.index()].push(record.full_name()),
            None => warn!(
                name = %record.full_name(),
                house = %record.house,
                cohort = %record.cohort_marker,
                "record fits no roster; skipped"
            ),
        }
    }

    for roster in rosters.rosters.iter_mut() {
        roster.sort();
    }
    rosters
}

pub fn cohort_in(summaries: &[RecordSummary], full_name: &str) -> Option<String> {
    summaries
        .iter()
        .find(|s| s.full_name == full_name)
        .map(|s| s.cohort.clone())
}

pub fn duplicated_last_names_in(summaries: &[RecordSummary]) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    let mut dupes = BTreeSet::new();

    for summary in summaries {
        let last = summary.last_name();
        if !seen.insert(last) {
            dupes.insert(last.to_string());
        }
    }
    dupes
}

pub fn housemates_in(summaries: &[RecordSummary], full_name: &str) -> BTreeSet<String> {
    let Some(target) = summaries.iter().find(|s| s.full_name == full_name) else {
        trace!(full_name, "no such person; no housemates");
        return BTreeSet::new();
    };

    summaries
        .iter()
        .filter(|s| s.house == target.house && s.cohort == target.cohort)
        .filter(|s| s.full_name != full_name)
        .map(|s| s.full_name.clone())
        .collect()
}
