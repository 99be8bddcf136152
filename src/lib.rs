mod config;
pub use config::DEFAULT_COMPOUNDER_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    CollocationRecord, CompounderConfig, Corpus, Error, FixedSequenceIter, MatchMode,
    PatternNormalizer, PhraseBatch, PhraseCompounder, PhraseSource, PhraseSpec, TextCompounder,
    TokenCompounder, Vocabulary,
};
pub mod types;
pub use types::{
    DictionaryEntries, FixedSequence, PhraseText, Token, TokenDocument, TokenId, TokenRef,
    WordCount, WordPattern,
};
mod utils;
pub use utils::{
    glob_to_regex, rank_phrases, read_collocation_table_from_path,
    read_collocation_table_from_string, regex_to_fixed, sort_collocations,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Compounds the phrases of `source` in `corpus` using the default configuration: `_` as the
/// concatenator, glob matching and case-insensitive comparison.
pub fn compound(corpus: &Corpus, source: &PhraseSource) -> Result<Corpus, Error> {
    compound_with_custom_config(DEFAULT_COMPOUNDER_CONFIG, corpus, source)
}

pub fn compound_with_custom_config(
    compounder_config: &CompounderConfig,
    corpus: &Corpus,
    source: &PhraseSource,
) -> Result<Corpus, Error> {
    let compounder = PhraseCompounder::new(compounder_config);

    compounder.compound(corpus, source)
}
