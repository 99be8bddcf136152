pub mod collocation_record;
pub use collocation_record::CollocationRecord;

pub mod corpus;
pub use corpus::Corpus;

pub mod error;
pub use error::Error;

pub mod fixed_sequence_iter;
pub use fixed_sequence_iter::FixedSequenceIter;

pub mod match_mode;
pub use match_mode::MatchMode;

pub mod pattern_normalizer;
pub use pattern_normalizer::PatternNormalizer;

pub mod phrase_batch;
pub use phrase_batch::PhraseBatch;

pub mod phrase_compounder;
pub use phrase_compounder::{CompounderConfig, PhraseCompounder};

pub mod phrase_source;
pub use phrase_source::PhraseSource;

pub mod phrase_spec;
pub use phrase_spec::PhraseSpec;

pub mod text_compounder;
pub use text_compounder::TextCompounder;

pub mod token_compounder;
pub use token_compounder::TokenCompounder;

pub mod vocabulary;
pub use vocabulary::Vocabulary;
