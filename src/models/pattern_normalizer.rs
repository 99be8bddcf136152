use crate::models::{
    CollocationRecord, CompounderConfig, Error, MatchMode, PhraseBatch, PhraseSource, PhraseSpec,
};
use crate::types::{DictionaryEntries, PhraseText, WordPattern};
use crate::utils::sort_collocations;
use log::debug;

/// Turns every supported phrase source into a ranked `PhraseBatch`.
pub struct PatternNormalizer {
    concatenator: char,
    match_mode: MatchMode,
    case_insensitive: bool,
}

impl PatternNormalizer {
    pub fn new(config: &CompounderConfig) -> Self {
        Self {
            concatenator: config.concatenator,
            match_mode: config.match_mode,
            case_insensitive: config.case_insensitive,
        }
    }

    pub fn normalize_source(&self, source: &PhraseSource) -> Result<PhraseBatch, Error> {
        let phrases = match source {
            PhraseSource::Phrases(phrases) => phrases
                .iter()
                .map(|phrase| self.normalize_phrase(phrase))
                .collect::<Result<Vec<_>, _>>()?,
            PhraseSource::WordPatterns(patterns) => patterns
                .iter()
                .map(|words| self.normalize_word_patterns(words))
                .collect::<Result<Vec<_>, _>>()?,
            PhraseSource::Dictionary(entries) => self.normalize_dictionary(entries)?,
            PhraseSource::Collocations(records) => self.normalize_collocations(records)?,
        };

        debug!("Normalized {} phrases from {}", phrases.len(), source);

        Ok(PhraseBatch::new(phrases))
    }

    /// A single whitespace-delimited phrase.
    pub fn normalize_phrase(&self, phrase: &str) -> Result<PhraseSpec, Error> {
        let words: Vec<WordPattern> = phrase.split_whitespace().map(String::from).collect();

        if words.is_empty() {
            return Err(Error::SpecLengthError {
                phrase: phrase.to_string(),
                word_count: 0,
            });
        }

        self.normalize_word_patterns(&words)
    }

    pub fn normalize_word_patterns(&self, words: &[WordPattern]) -> Result<PhraseSpec, Error> {
        PhraseSpec::with_concatenator(
            words.to_vec(),
            self.match_mode,
            self.case_insensitive,
            self.concatenator,
        )
    }

    /// A dictionary value. Previously compounded entries are split back into words on the
    /// concatenator.
    pub fn normalize_dictionary_entry(&self, entry: &str) -> Result<PhraseSpec, Error> {
        let phrase: PhraseText = entry.replace(self.concatenator, " ");

        self.normalize_phrase(&phrase)
    }

    /// Collocation words are literal tokens, so they are always matched as fixed words.
    pub fn normalize_collocation(&self, record: &CollocationRecord) -> Result<PhraseSpec, Error> {
        let words: Vec<WordPattern> = record
            .to_phrase_text()
            .split_whitespace()
            .map(String::from)
            .collect();

        if words.is_empty() {
            return Err(Error::SpecLengthError {
                phrase: record.to_phrase_text(),
                word_count: 0,
            });
        }

        PhraseSpec::with_concatenator(
            words,
            MatchMode::Fixed,
            self.case_insensitive,
            self.concatenator,
        )
    }

    fn normalize_dictionary(&self, entries: &DictionaryEntries) -> Result<Vec<PhraseSpec>, Error> {
        entries
            .values()
            .flatten()
            .map(|entry| self.normalize_dictionary_entry(entry))
            .collect()
    }

    fn normalize_collocations(
        &self,
        records: &[CollocationRecord],
    ) -> Result<Vec<PhraseSpec>, Error> {
        let mut sorted = records.to_vec();
        sort_collocations(&mut sorted);

        sorted
            .iter()
            .map(|record| self.normalize_collocation(record))
            .collect()
    }
}
