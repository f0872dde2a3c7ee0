//! Per-row parsing core: name tokenization, fixed-column field extraction,
//! and person validation.

pub mod fields;
pub mod name;
pub mod validate;
pub mod vocab;

use crate::parser::fields::RowFieldExtractor;
use crate::parser::name::NameTokenizer;
use crate::parser::validate::PersonValidator;
use crate::parser::vocab::Vocabulary;
use crate::spreadsheet::cell::RawRow;

/// One person derived from a single spreadsheet row.
///
/// Constructed transiently per row and never mutated afterwards; empty
/// strings uniformly mean "could not parse". Rows whose person fails
/// validation are dropped whole, never exported with blanks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedPerson {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub postal_code: String,
    pub plan_number: String,
    pub ssn: String,
}

/// Composes the tokenizer, field extractor, and validator over one row.
pub struct RowParser {
    tokenizer: NameTokenizer,
    extractor: RowFieldExtractor,
    validator: PersonValidator,
    name_column: usize,
}

impl RowParser {
    pub fn new(name_column: usize) -> RowParser {
        RowParser::with_vocabulary(name_column, Vocabulary::default())
    }

    pub fn with_vocabulary(name_column: usize, vocab: Vocabulary) -> RowParser {
        RowParser {
            tokenizer: NameTokenizer::new(vocab.clone()),
            extractor: RowFieldExtractor::new(),
            validator: PersonValidator::new(vocab),
            name_column,
        }
    }

    /// 0-based index of the column holding the full name.
    pub fn name_column(&self) -> usize {
        self.name_column
    }

    /// Derives a person from one row. Identifier extraction runs only when
    /// the caller enables it for the pass.
    pub fn parse(&self, row: &RawRow, extract_identifiers: bool) -> ParsedPerson {
        let name = self.tokenizer.split(row.cell(self.name_column));
        let postal_code = self.extractor.postal_code(row);
        let (plan_number, ssn) = if extract_identifiers {
            let identifiers = self.extractor.identifiers(row);
            (identifiers.plan_number, identifiers.ssn)
        } else {
            (String::new(), String::new())
        };

        ParsedPerson {
            first_name: name.first,
            middle_name: name.middle,
            last_name: name.last,
            postal_code,
            plan_number,
            ssn,
        }
    }

    /// Applies the person gate to a parsed row.
    pub fn accepts(&self, person: &ParsedPerson) -> bool {
        self.validator.is_person(person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spreadsheet::cell::CellValue;

    fn row(cells: Vec<(usize, CellValue)>) -> RawRow {
        let width = cells.iter().map(|(index, _)| index + 1).max().unwrap_or(0);
        let mut values = vec![CellValue::Missing; width];
        for (index, value) in cells {
            values[index] = value;
        }
        RawRow::new(values)
    }

    #[test]
    fn parses_name_postal_and_identifiers_from_their_columns() {
        let parser = RowParser::new(6);
        let row = row(vec![
            (5, CellValue::Text("Plan 55512 SSN 123-45-6789".to_owned())),
            (6, CellValue::Text("Mr. John A. Van Der Berg Jr.".to_owned())),
            (9, CellValue::Text("12345 Main".to_owned())),
            (11, CellValue::Number(8901.0)),
        ]);

        let person = parser.parse(&row, true);
        assert_eq!(person.first_name, "John");
        assert_eq!(person.middle_name, "A");
        assert_eq!(person.last_name, "Van Der Berg");
        assert_eq!(person.postal_code, "08901");
        assert_eq!(person.plan_number, "55512");
        assert_eq!(person.ssn, "123-45-6789");
        assert!(parser.accepts(&person));
    }

    #[test]
    fn identifier_extraction_is_off_unless_enabled() {
        let parser = RowParser::new(6);
        let row = row(vec![
            (5, CellValue::Text("55512 123-45-6789".to_owned())),
            (6, CellValue::Text("Jane Doe".to_owned())),
        ]);

        let person = parser.parse(&row, false);
        assert_eq!(person.plan_number, "");
        assert_eq!(person.ssn, "");
    }

    #[test]
    fn unparseable_rows_degrade_to_empty_fields_and_fail_the_gate() {
        let parser = RowParser::new(6);
        let person = parser.parse(&row(vec![(6, CellValue::Number(1234.0))]), true);
        assert_eq!(person, ParsedPerson::default());
        assert!(!parser.accepts(&person));
    }
}
