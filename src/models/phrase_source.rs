use crate::models::CollocationRecord;
use crate::types::{DictionaryEntries, PhraseText, WordPattern};
use std::fmt;

/// Where the phrases to compound come from.
#[derive(Debug, Clone)]
pub enum PhraseSource {
    /// Whitespace-delimited phrases, e.g. `"capital gains tax"`.
    Phrases(Vec<PhraseText>),
    /// Phrases given as explicit per-position word patterns.
    WordPatterns(Vec<Vec<WordPattern>>),
    /// Dictionary entries; values may hold previously compounded phrases.
    Dictionary(DictionaryEntries),
    /// Scored n-grams; only the word columns are used.
    Collocations(Vec<CollocationRecord>),
}

impl PhraseSource {
    pub fn kind(&self) -> &'static str {
        match self {
            PhraseSource::Phrases(_) => "phrase list",
            PhraseSource::WordPatterns(_) => "word pattern list",
            PhraseSource::Dictionary(_) => "dictionary",
            PhraseSource::Collocations(_) => "collocation table",
        }
    }
}

impl fmt::Display for PhraseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}
