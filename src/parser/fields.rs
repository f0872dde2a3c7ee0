//! Postal-code and identifier extraction from fixed row columns.

use crate::spreadsheet::cell::CellValue;
use crate::spreadsheet::cell::RawRow;
use regex::Regex;
use std::ops::RangeInclusive;

/// Column window scanned for a trailing 5-digit postal code (columns I-M).
pub const POSTAL_WINDOW: RangeInclusive<usize> = 8..=12;

/// Column holding plan-number / SSN text (column F).
pub const IDENTIFIER_COLUMN: usize = 5;

/// Plan number and SSN extracted from the identifier column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Identifiers {
    pub plan_number: String,
    pub ssn: String,
}

/// Scans fixed row columns for postal codes and identifiers.
///
/// The two extractions use opposite tie-breaks on purpose: postal codes are
/// expected to trail their source field (last match wins across the window),
/// plan numbers to lead theirs (first match wins). Known heuristics, not
/// correctness guarantees.
pub struct RowFieldExtractor {
    five_digits: Regex,
    dashed_ssn: Regex,
}

impl Default for RowFieldExtractor {
    fn default() -> RowFieldExtractor {
        RowFieldExtractor::new()
    }
}

impl RowFieldExtractor {
    pub fn new() -> RowFieldExtractor {
        RowFieldExtractor {
            five_digits: Regex::new(r"\b\d{5}\b").expect("Hardcode regex pattern"),
            dashed_ssn: Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").expect("Hardcode regex pattern"),
        }
    }

    /// Extracts a 5-digit postal code from the candidate window.
    ///
    /// Text cells contribute every standalone 5-digit run; numeric cells
    /// contribute their integer rendering zero-padded to 5 digits, when that
    /// padded form is exactly 5 digits. The last match across the whole
    /// window wins.
    ///
    /// # Arguments
    /// * `row` - The row whose window columns are scanned
    ///
    /// # Returns
    /// The winning 5-digit code, or an empty string when the window holds
    /// no match
    pub fn postal_code(&self, row: &RawRow) -> String {
        let mut postal_code = String::new();
        for index in POSTAL_WINDOW {
            match row.cell(index) {
                CellValue::Text(text) => {
                    if let Some(found) = self.five_digits.find_iter(text).last() {
                        postal_code = found.as_str().to_owned();
                    }
                }
                CellValue::Number(value) => {
                    if let Some(padded) = zero_pad_zip(*value) {
                        postal_code = padded;
                    }
                }
                CellValue::Missing => (),
            }
        }
        postal_code
    }

    /// Extracts a plan number and SSN from the identifier column.
    ///
    /// The SSN is taken verbatim from a strict dashed pattern when present;
    /// otherwise the cell is stripped to digits and the last 9 are formatted
    /// as `DDD-DD-DDDD` (trailing digits are the reliable ones when an
    /// unrelated prefix shares the cell). The plan number is the first
    /// standalone 5-digit run in the original, unstripped text.
    ///
    /// # Arguments
    /// * `row` - The row whose identifier column is read
    ///
    /// # Returns
    /// The extracted identifiers; either field is empty when its pattern
    /// is absent
    pub fn identifiers(&self, row: &RawRow) -> Identifiers {
        let Some(text) = row.cell(IDENTIFIER_COLUMN).render() else {
            return Identifiers::default();
        };

        let ssn = match self.dashed_ssn.find(&text) {
            Some(found) => found.as_str().to_owned(),
            None => {
                let digits: String = text.chars().filter(char::is_ascii_digit).collect();
                if digits.len() >= 9 {
                    let tail = &digits[digits.len() - 9..];
                    format!("{}-{}-{}", &tail[..3], &tail[3..5], &tail[5..])
                } else {
                    String::new()
                }
            }
        };

        let plan_number = self
            .five_digits
            .find(&text)
            .map(|found| found.as_str().to_owned())
            .unwrap_or_default();

        Identifiers { plan_number, ssn }
    }
}

/// Zero-pads a numeric cell's integer rendering to a 5-digit postal code.
/// Negative, non-finite, and 6-or-more-digit values yield nothing.
fn zero_pad_zip(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let integer = value.trunc() as i64;
    if (0..=99_999).contains(&integer) {
        Some(format!("{integer:05}"))
    } else {
        None
    }
}
