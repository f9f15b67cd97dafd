//! Line-oriented roster file reader.
//!
//! Every query goes through [`load_records`], so the five-field contract is
//! enforced in exactly one place: [`parse_line`].

use crate::error::{Result, RosterError};
use crate::record::Record;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

pub const FIELD_SEPARATOR: char = '|';
pub const FIELD_COUNT: usize = 5;

/// Parse one roster line. Trailing whitespace (including the newline) is
/// stripped before splitting. `line_number` is 1-based and only used for
/// error reporting.
pub fn parse_line(line: &str, line_number: usize, path: &Path) -> Result<Record> {
    let fields: Vec<&str> = line.trim_end().split(FIELD_SEPARATOR).collect();

    match fields.as_slice() {
        [first, last, house, advisor, cohort] => Ok(Record {
            first_name: first.to_string(),
            last_name: last.to_string(),
            house: house.to_string(),
            advisor: advisor.to_string(),
            cohort_marker: cohort.to_string(),
        }),
        _ => Err(RosterError::FieldCount {
            path: path.to_path_buf(),
            line: line_number,
            expected: FIELD_COUNT,
            actual: fields.len(),
        }),
    }
}

/// Iterator over the records of any buffered source.
pub struct RecordReader<R> {
    inner: R,
    path: PathBuf,
    line_number: usize,
    buf: String,
}

impl<R: BufRead> RecordReader<R> {
    /// `path` labels errors; it is not opened.
    pub fn new(inner: R, path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            path: path.into(),
            line_number: 0,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.inner.read_line(&mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                Some(parse_line(&self.buf, self.line_number, &self.path))
            }
            Err(e) => Some(Err(RosterError::io(&self.path, e))),
        }
    }
}

/// Read and parse the whole file. The file handle is released before this
/// returns, on success and on error alike.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| RosterError::io(path, e))?;

    let records = RecordReader::new(BufReader::new(file), path).collect::<Result<Vec<_>>>()?;

    debug!(path = %path.display(), records = records.len(), "loaded roster");
    trace!(?records, "parsed records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_line_strips_trailing_whitespace() {
        let record = parse_line(
            "Harry|Potter|Gryffindor|McGonagall|Fall 2015  \r\n",
            1,
            Path::new("test"),
        )
        .unwrap();

        assert_eq!(record.first_name, "Harry");
        assert_eq!(record.last_name, "Potter");
        assert_eq!(record.house, "Gryffindor");
        assert_eq!(record.advisor, "McGonagall");
        assert_eq!(record.cohort_marker, "Fall 2015");
    }

    #[test]
    fn test_parse_line_keeps_empty_fields() {
        let record = parse_line("Severus|Snape|||I\n", 1, Path::new("test")).unwrap();
        assert_eq!(record.house, "");
        assert_eq!(record.advisor, "");
        assert_eq!(record.cohort_marker, "I");
    }

    #[test]
    fn test_parse_line_rejects_wrong_field_count() {
        let err = parse_line("Harry|Potter|Gryffindor|Fall 2015", 7, Path::new("data.txt"))
            .unwrap_err();

        match err {
            RosterError::FieldCount {
                line,
                expected,
                actual,
                ..
            } => {
                assert_eq!(line, 7);
                assert_eq!(expected, 5);
                assert_eq!(actual, 4);
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = parse_line("a|b|c|d|e|f", 1, Path::new("data.txt")).unwrap_err();
        assert!(matches!(err, RosterError::FieldCount { actual: 6, .. }));
    }

    #[test]
    fn test_blank_line_is_a_parse_error() {
        let err = parse_line("\n", 2, Path::new("data.txt")).unwrap_err();
        assert!(matches!(err, RosterError::FieldCount { actual: 1, line: 2, .. }));
    }

    #[test]
    fn test_reader_counts_lines_from_one() {
        let data = "Harry|Potter|Gryffindor|McGonagall|Fall 2015\nbroken line\n";
        let mut reader = RecordReader::new(data.as_bytes(), "inline");

        assert!(reader.next().unwrap().is_ok());
        let err = reader.next().unwrap().unwrap_err();
        assert!(matches!(err, RosterError::FieldCount { line: 2, .. }));
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_reader_handles_missing_final_newline() {
        let data = "Harry|Potter|Gryffindor|McGonagall|Fall 2015\nSeverus|Snape|||I";
        let records: Vec<Record> = RecordReader::new(data.as_bytes(), "inline")
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].cohort_marker, "I");
    }

    #[test]
    fn test_load_records_preserves_file_order() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "Ron|Weasley|Gryffindor|McGonagall|Fall 2015").unwrap();
        writeln!(tmp, "Cho|Chang|Ravenclaw|Flitwick|Fall 2015").unwrap();

        let records = load_records(tmp.path()).unwrap();
        let names: Vec<String> = records.iter().map(Record::full_name).collect();
        assert_eq!(names, vec!["Ron Weasley", "Cho Chang"]);
    }

    #[test]
    fn test_load_records_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, RosterError::Io { .. }));
    }

    #[test]
    fn test_load_records_fails_whole_file_on_bad_line() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "Ron|Weasley|Gryffindor|McGonagall|Fall 2015").unwrap();
        writeln!(tmp, "Cho|Chang|Ravenclaw").unwrap();

        let err = load_records(tmp.path()).unwrap_err();
        assert!(err.is_parse_error());
    }
}
