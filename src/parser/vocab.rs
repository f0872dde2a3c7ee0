//! Word lists that drive name token classification.

/// Honorifics dropped from the front of a name.
const PREFIXES: [&str; 6] = ["mr", "mrs", "ms", "miss", "dr", "prof"];

/// Generational and professional suffixes dropped from the end of a name.
const SUFFIXES: [&str; 9] = ["jr", "sr", "ii", "iii", "iv", "v", "md", "phd", "esq"];

/// Compound-surname connectors: short words that attach to the following
/// surname token instead of standing alone ("van der berg").
const CONNECTORS: [&str; 16] = [
    "de", "del", "la", "le", "van", "von", "der", "da", "di", "du", "st", "mac", "bin", "al",
    "los", "dos",
];

/// Keywords whose presence marks a name as an organization, not a person.
const ORGANIZATION_KEYWORDS: [&str; 10] = [
    "inc", "llc", "corp", "co", "company", "group", "corporation", "pllc", "llp", "ltd",
];

/// Immutable vocabulary injected into the tokenizer and validator at
/// construction. Loaded once and never mutated, so it is safe to clone and
/// share freely; tests substitute their own lists.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    prefixes: Vec<String>,
    suffixes: Vec<String>,
    connectors: Vec<String>,
    organization_keywords: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Vocabulary {
        Vocabulary::new(&PREFIXES, &SUFFIXES, &CONNECTORS, &ORGANIZATION_KEYWORDS)
    }
}

impl Vocabulary {
    pub fn new(
        prefixes: &[&str],
        suffixes: &[&str],
        connectors: &[&str],
        organization_keywords: &[&str],
    ) -> Vocabulary {
        let owned = |words: &[&str]| words.iter().map(|word| (*word).to_owned()).collect();
        Vocabulary {
            prefixes: owned(prefixes),
            suffixes: owned(suffixes),
            connectors: owned(connectors),
            organization_keywords: owned(organization_keywords),
        }
    }

    /// Checks membership against the lower-cased token.
    pub fn is_prefix(&self, token: &str) -> bool {
        self.prefixes.iter().any(|word| word == token)
    }

    pub fn is_suffix(&self, token: &str) -> bool {
        self.suffixes.iter().any(|word| word == token)
    }

    pub fn is_connector(&self, token: &str) -> bool {
        self.connectors.iter().any(|word| word == token)
    }

    pub fn organization_keywords(&self) -> impl Iterator<Item = &str> {
        self.organization_keywords.iter().map(String::as_str)
    }
}
