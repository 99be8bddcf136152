use crate::constants::{DEFAULT_CONCATENATOR, MAX_PHRASE_WORDS};
use crate::models::{Error, MatchMode};
use crate::types::{WordCount, WordPattern};
use crate::utils::glob_to_regex;
use regex::{Regex, RegexBuilder};

/// A normalized phrase: one regular expression per word position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseSpec {
    phrase: String,
    patterns: Vec<String>,
    match_mode: MatchMode,
    case_insensitive: bool,
}

impl PhraseSpec {
    /// Builds a phrase from its per-position word patterns, assuming the default concatenator.
    pub fn new(
        words: Vec<WordPattern>,
        match_mode: MatchMode,
        case_insensitive: bool,
    ) -> Result<Self, Error> {
        Self::with_concatenator(words, match_mode, case_insensitive, DEFAULT_CONCATENATOR)
    }

    /// Builds a phrase from its per-position word patterns. Glob wildcards never match the
    /// `concatenator`.
    ///
    /// Fails with `SpecLengthError` when there are no words or more than `MAX_PHRASE_WORDS`,
    /// and with `PatternError` when any word does not compile.
    pub fn with_concatenator(
        words: Vec<WordPattern>,
        match_mode: MatchMode,
        case_insensitive: bool,
        concatenator: char,
    ) -> Result<Self, Error> {
        let phrase = words.join(" ");

        if words.is_empty() || words.len() > MAX_PHRASE_WORDS {
            return Err(Error::SpecLengthError {
                phrase,
                word_count: words.len(),
            });
        }

        let patterns: Vec<String> = words
            .iter()
            .map(|word| match match_mode {
                MatchMode::Regex => word.clone(),
                MatchMode::Fixed | MatchMode::Glob => glob_to_regex(word, concatenator),
            })
            .collect();

        let spec = Self {
            phrase,
            patterns,
            match_mode,
            case_insensitive,
        };

        // Compile each position up front so a bad word is reported against its phrase.
        spec.token_regexes()?;

        Ok(spec)
    }

    /// The phrase as written, words separated by single spaces.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn word_count(&self) -> WordCount {
        self.patterns.len()
    }

    /// Regular expression source for each word position.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Regex matching the whole phrase in running text.
    ///
    /// Each word gets its own named group so the words can be rejoined regardless of any
    /// groups inside user supplied patterns. Words are separated by one or more whitespace
    /// characters. A `\b` is placed at either end only where the literal phrase starts or ends
    /// with a word character; other edges are checked by the caller.
    pub fn text_regex(&self) -> Result<Regex, Error> {
        let body = self
            .patterns
            .iter()
            .enumerate()
            .map(|(idx, pattern)| format!("(?P<{}>{})", Self::word_group_name(idx), pattern))
            .collect::<Vec<_>>()
            .join(r"\s+");

        let leading = if self.has_word_edge(self.phrase.chars().next()) {
            r"\b"
        } else {
            ""
        };
        let trailing = if self.has_word_edge(self.phrase.chars().next_back()) {
            r"\b"
        } else {
            ""
        };

        self.build_regex(&format!("{}{}{}", leading, body, trailing))
    }

    /// One regex per word position, each anchored to match a whole token.
    pub fn token_regexes(&self) -> Result<Vec<Regex>, Error> {
        self.patterns
            .iter()
            .map(|pattern| self.build_regex(&format!("^(?:{})$", pattern)))
            .collect()
    }

    pub(crate) fn word_group_name(idx: usize) -> String {
        format!("__pc_w{}", idx)
    }

    /// Regex words are opaque, so only fixed and glob phrases report a word edge.
    fn has_word_edge(&self, edge: Option<char>) -> bool {
        self.match_mode != MatchMode::Regex && edge.map_or(false, is_word_char)
    }

    fn build_regex(&self, source: &str) -> Result<Regex, Error> {
        RegexBuilder::new(source)
            .case_insensitive(self.case_insensitive)
            .build()
            .map_err(|e| Error::PatternError {
                phrase: self.phrase.clone(),
                message: e.to_string(),
            })
    }
}

/// Word characters in the sense of `\b`.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
