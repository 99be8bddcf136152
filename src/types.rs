use std::collections::BTreeMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units of a tokenized document.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A unique identifier for a token type within a `Vocabulary`, assigned in order of first
/// appearance.
pub type TokenId = usize;

/// An ordered sequence of tokens making up one document.
pub type TokenDocument = Vec<Token>;

/// A concrete, wildcard-free token sequence that a phrase pattern can realize against a
/// vocabulary.
pub type FixedSequence = Vec<Token>;

/// A single per-position word pattern, as written by the caller (literal, glob or regex).
pub type WordPattern = String;

/// A phrase written as one whitespace-delimited string, e.g. `"capital gains tax"`.
pub type PhraseText = String;

/// Number of words in a phrase.
pub type WordCount = usize;

/// Dictionary of phrase lists, keyed by entry name. Values may contain phrases that were
/// previously compounded with the concatenator (e.g. `"united_states"`).
pub type DictionaryEntries = BTreeMap<String, Vec<PhraseText>>;
