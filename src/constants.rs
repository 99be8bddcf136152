/// Character used to join the words of a compound token unless configured otherwise.
pub const DEFAULT_CONCATENATOR: char = '_';

/// Longest phrase, in words, that can be compounded.
pub const MAX_PHRASE_WORDS: usize = 9;

/// Upper bound on the number of fixed sequences a single phrase may expand to when resolved
/// against a vocabulary.
pub const DEFAULT_MAX_FIXED_SEQUENCES: usize = 10_000;

/// Column headers recognized when reading a collocation table.
pub const COLLOCATION_WORD1_HEADER: &str = "word1";
pub const COLLOCATION_WORD2_HEADER: &str = "word2";
pub const COLLOCATION_WORD3_HEADER: &str = "word3";
pub const COLLOCATION_COUNT_HEADER: &str = "count";
pub const COLLOCATION_STATISTIC_HEADER: &str = "statistic";
