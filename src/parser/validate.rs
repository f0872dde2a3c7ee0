//! Person validation: gates which parsed rows reach the export.

use crate::parser::vocab::Vocabulary;
use crate::parser::ParsedPerson;

/// Rejects rows whose derived name indicates a non-person.
///
/// The organization-keyword check matches substrings, not whole tokens, so
/// "Co" also fires inside names like "Cohen". Kept as-is to preserve the
/// established filtering behavior; tightening it to whole-token comparison
/// would change which rows are exported.
pub struct PersonValidator {
    vocab: Vocabulary,
}

impl PersonValidator {
    pub fn new(vocab: Vocabulary) -> PersonValidator {
        PersonValidator { vocab }
    }

    /// Decides inclusion. A row is emitted in full or dropped in full.
    pub fn is_person(&self, person: &ParsedPerson) -> bool {
        if person.first_name.is_empty() || person.last_name.is_empty() {
            return false;
        }

        let combined = format!("{} {}", person.first_name, person.last_name).to_lowercase();
        if self
            .vocab
            .organization_keywords()
            .any(|keyword| combined.contains(keyword))
        {
            return false;
        }

        // Digits never occur in real personal names
        !combined.chars().any(|character| character.is_ascii_digit())
    }
}
