//! Roster accumulation, cleanup, and CSV export.

use crate::error::RosterError;
use crate::parser::ParsedPerson;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Column headers of the export file, in output order.
pub const HEADER: [&str; 6] = [
    "FirstName",
    "LastName",
    "ZipCode",
    "Plan#",
    "SSN",
    "CommunicationType",
];

/// Marker substring whose presence in any field drops the whole row.
const BAD_SSN_MARKER: &str = "bad ssn";

/// One exported roster row. The middle name is parsed but not part of the
/// export schema.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RosterRecord {
    pub first_name: String,
    pub last_name: String,
    pub zip_code: String,
    pub plan_number: String,
    pub ssn: String,
    pub communication_type: String,
}

impl RosterRecord {
    /// Flattens a parsed person into an export row tagged with the pass's
    /// communication channel.
    pub fn new(person: ParsedPerson, communication_type: &str) -> RosterRecord {
        RosterRecord {
            first_name: person.first_name,
            last_name: person.last_name,
            zip_code: person.postal_code,
            plan_number: person.plan_number,
            ssn: person.ssn,
            communication_type: communication_type.to_owned(),
        }
    }

    fn fields(&self) -> [&str; 6] {
        [
            &self.first_name,
            &self.last_name,
            &self.zip_code,
            &self.plan_number,
            &self.ssn,
            &self.communication_type,
        ]
    }

    fn contains_bad_ssn_marker(&self) -> bool {
        self.fields()
            .iter()
            .any(|field| field.to_lowercase().contains(BAD_SSN_MARKER))
    }
}

/// Export-time cleanup: drops any row carrying the "Bad SSN" marker in any
/// field (case-insensitive), then collapses exact full-row duplicates,
/// keeping the first occurrence in accumulation order.
pub fn clean(records: Vec<RosterRecord>) -> Vec<RosterRecord> {
    let before = records.len();
    let mut seen = HashSet::new();
    let cleaned: Vec<RosterRecord> = records
        .into_iter()
        .filter(|record| !record.contains_bad_ssn_marker())
        .filter(|record| seen.insert(record.clone()))
        .collect();
    info!(
        accumulated = before,
        exported = cleaned.len(),
        "cleaned roster"
    );
    cleaned
}

/// Writes the roster as a flat CSV table with the fixed header.
pub fn write_csv(path: &Path, records: &[RosterRecord]) -> Result<(), RosterError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record(record.fields())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(first: &str, channel: &str) -> RosterRecord {
        RosterRecord {
            first_name: first.to_owned(),
            last_name: "Doe".to_owned(),
            zip_code: "12345".to_owned(),
            plan_number: String::new(),
            ssn: String::new(),
            communication_type: channel.to_owned(),
        }
    }

    #[test]
    fn exact_duplicates_collapse_to_the_first_occurrence() {
        let cleaned = clean(vec![
            record("Jane", "Print"),
            record("John", "Print"),
            record("Jane", "Print"),
        ]);
        assert_eq!(cleaned, vec![record("Jane", "Print"), record("John", "Print")]);
    }

    #[test]
    fn rows_differing_only_by_channel_are_kept() {
        let cleaned = clean(vec![record("Jane", "Print"), record("Jane", "Email")]);
        assert_eq!(cleaned.len(), 2);
    }

    #[test]
    fn bad_ssn_marker_drops_the_row_in_any_case_and_any_field() {
        let mut marked = record("Jane", "Email");
        marked.ssn = "BAD SSN".to_owned();
        let mut also_marked = record("John", "Email");
        also_marked.plan_number = "has Bad Ssn inside".to_owned();

        let cleaned = clean(vec![marked, record("Mary", "Email"), also_marked]);
        assert_eq!(cleaned, vec![record("Mary", "Email")]);
    }

    #[test]
    fn writes_header_and_rows() {
        let directory = tempfile::tempdir().expect("temp dir");
        let path = directory.path().join("roster.csv");
        write_csv(&path, &[record("Jane", "Print")]).expect("write csv");

        let contents = std::fs::read_to_string(&path).expect("read back");
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("FirstName,LastName,ZipCode,Plan#,SSN,CommunicationType")
        );
        assert_eq!(lines.next(), Some("Jane,Doe,12345,,,Print"));
        assert_eq!(lines.next(), None);
    }
}
