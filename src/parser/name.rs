//! Name tokenization and role assignment.

use crate::parser::vocab::Vocabulary;
use crate::spreadsheet::cell::CellValue;

/// A raw full name decomposed into first, middle, and last parts.
///
/// Empty strings mean the part could not be derived; `first` is always
/// non-empty when any token survives normalization.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NameParts {
    pub first: String,
    pub middle: String,
    pub last: String,
}

/// Normalizes a raw name value and assigns token roles: prefix and suffix
/// stripping, compound-surname grouping, per-token capitalization.
pub struct NameTokenizer {
    vocab: Vocabulary,
}

impl NameTokenizer {
    pub fn new(vocab: Vocabulary) -> NameTokenizer {
        NameTokenizer { vocab }
    }

    /// Splits a raw name cell into (first, middle, last).
    ///
    /// Non-text cells yield all-empty parts; so does a name left with no
    /// tokens after normalization and prefix/suffix stripping.
    ///
    /// # Arguments
    /// * `value` - The raw name cell, of any type
    ///
    /// # Returns
    /// The assigned name parts; `first` is non-empty whenever any token
    /// survives stripping
    pub fn split(&self, value: &CellValue) -> NameParts {
        let Some(raw) = value.as_text() else {
            return NameParts::default();
        };

        let normalized = normalize(raw);
        let mut tokens: Vec<&str> = normalized.split_whitespace().collect();
        if tokens.first().is_some_and(|token| self.vocab.is_prefix(token)) {
            tokens.remove(0);
        }
        if tokens.last().is_some_and(|token| self.vocab.is_suffix(token)) {
            tokens.pop();
        }

        match tokens.len() {
            0 => NameParts::default(),
            1 => NameParts {
                first: capitalize(tokens[0]),
                ..NameParts::default()
            },
            2 => NameParts {
                first: capitalize(tokens[0]),
                middle: String::new(),
                last: capitalize(tokens[1]),
            },
            _ => {
                // Scan backward from the final token, pulling preceding
                // connectors into the surname group. The scan stops before
                // index 0, so the first token is never consumed even when
                // the whole name is connector words.
                let mut start = tokens.len() - 1;
                while start > 1 && self.vocab.is_connector(tokens[start - 1]) {
                    start -= 1;
                }
                NameParts {
                    first: capitalize(tokens[0]),
                    middle: capitalize_joined(&tokens[1..start]),
                    last: capitalize_joined(&tokens[start..]),
                }
            }
        }
    }
}

/// Lower-cases, strips literal periods and commas. Whitespace runs collapse
/// at the subsequent split.
fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|character| *character != '.' && *character != ',')
        .collect()
}

/// Renders a token with its first character upper-cased and the remainder
/// lower-cased.
fn capitalize(token: &str) -> String {
    let mut characters = token.chars();
    match characters.next() {
        Some(first) => first
            .to_uppercase()
            .chain(characters.flat_map(|character| character.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

fn capitalize_joined(tokens: &[&str]) -> String {
    tokens
        .iter()
        .map(|token| capitalize(token))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> NameTokenizer {
        NameTokenizer::new(Vocabulary::default())
    }

    fn split(name: &str) -> NameParts {
        tokenizer().split(&CellValue::Text(name.to_owned()))
    }

    #[test]
    fn strips_prefix_and_suffix_and_groups_connector_chain() {
        let parts = split("Mr. John A. Van Der Berg Jr.");
        assert_eq!(parts.first, "John");
        assert_eq!(parts.middle, "A");
        assert_eq!(parts.last, "Van Der Berg");
    }

    #[test]
    fn two_tokens_become_first_and_last() {
        let parts = split("Jane Doe");
        assert_eq!(parts.first, "Jane");
        assert_eq!(parts.middle, "");
        assert_eq!(parts.last, "Doe");
    }

    #[test]
    fn single_token_is_first_name_only() {
        let parts = split("Smith");
        assert_eq!(parts.first, "Smith");
        assert_eq!(parts.middle, "");
        assert_eq!(parts.last, "");
    }

    #[test]
    fn multiple_middle_tokens_are_space_joined() {
        let parts = split("mary beth ann smith");
        assert_eq!(parts.first, "Mary");
        assert_eq!(parts.middle, "Beth Ann");
        assert_eq!(parts.last, "Smith");
    }

    #[test]
    fn all_connector_name_keeps_token_zero_as_first() {
        let parts = split("van der berg");
        assert_eq!(parts.first, "Van");
        assert_eq!(parts.middle, "");
        assert_eq!(parts.last, "Der Berg");
    }

    #[test]
    fn non_text_cells_yield_empty_parts() {
        assert_eq!(tokenizer().split(&CellValue::Number(42.0)), NameParts::default());
        assert_eq!(tokenizer().split(&CellValue::Missing), NameParts::default());
    }

    #[test]
    fn name_reduced_to_nothing_yields_empty_parts() {
        assert_eq!(split("Dr. Jr."), NameParts::default());
        assert_eq!(split("  ..,,  "), NameParts::default());
    }

    #[test]
    fn last_and_middle_are_empty_whenever_first_is_empty() {
        for value in [
            CellValue::Text("".to_owned()),
            CellValue::Text("mr phd".to_owned()),
            CellValue::Number(12345.0),
            CellValue::Missing,
        ] {
            let parts = tokenizer().split(&value);
            assert!(parts.first.is_empty());
            assert!(parts.middle.is_empty());
            assert!(parts.last.is_empty());
        }
    }

    #[test]
    fn split_is_idempotent_on_normalized_output() {
        let parts = split("Mr. John A. Van Der Berg Jr.");
        let rejoined = format!("{} {} {}", parts.first, parts.middle, parts.last).to_lowercase();
        assert_eq!(split(&rejoined), parts);
    }

    #[test]
    fn collapses_whitespace_runs_before_tokenizing() {
        let parts = split("  jane \t  marie   doe ");
        assert_eq!(parts.first, "Jane");
        assert_eq!(parts.middle, "Marie");
        assert_eq!(parts.last, "Doe");
    }

    #[test]
    fn substituted_vocabulary_drives_classification() {
        let vocab = Vocabulary::new(&["capt"], &[], &["of"], &[]);
        let tokenizer = NameTokenizer::new(vocab);
        let parts = tokenizer.split(&CellValue::Text("Capt. Jack of Sparrow".to_owned()));
        assert_eq!(parts.first, "Jack");
        assert_eq!(parts.middle, "");
        assert_eq!(parts.last, "Of Sparrow");
    }
}
