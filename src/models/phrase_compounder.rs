use crate::models::{
    Corpus, Error, MatchMode, PatternNormalizer, PhraseBatch, PhraseSource, TextCompounder,
    TokenCompounder, Vocabulary,
};
use crate::types::TokenDocument;
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompounderConfig {
    pub concatenator: char,
    pub match_mode: MatchMode,
    pub case_insensitive: bool,
    pub max_fixed_sequences: usize,
}

pub struct PhraseCompounder<'a> {
    config: &'a CompounderConfig,
    normalizer: PatternNormalizer,
}

impl<'a> PhraseCompounder<'a> {
    pub fn new(config: &'a CompounderConfig) -> Self {
        Self {
            config,
            normalizer: PatternNormalizer::new(config),
        }
    }

    /// Compounds `source` phrases in `corpus`, returning a corpus of the same variant.
    ///
    /// Routing:
    /// - text or texts with any phrase source → regex substitution;
    /// - tokens with a phrase or word pattern list → fixed sequence merging;
    /// - tokens with a dictionary or collocation table → `DispatchError`.
    pub fn compound(&self, corpus: &Corpus, source: &PhraseSource) -> Result<Corpus, Error> {
        if corpus.is_tokenized()
            && matches!(
                source,
                PhraseSource::Dictionary(_) | PhraseSource::Collocations(_)
            )
        {
            return Err(Error::DispatchError(format!(
                "cannot compound {} with a {}",
                corpus, source
            )));
        }

        info!("Normalizing {}...", source);
        let batch = self.normalizer.normalize_source(source)?;

        info!("Compounding {} phrases over {}...", batch.len(), corpus);
        match corpus {
            Corpus::Text(text) => Ok(Corpus::Text(self.compound_text(text, &batch)?)),
            Corpus::Texts(texts) => Ok(Corpus::Texts(self.compound_texts(texts, &batch)?)),
            Corpus::Tokens(documents) => {
                Ok(Corpus::Tokens(self.compound_tokens(documents, &batch)?))
            }
        }
    }

    pub fn normalize(&self, source: &PhraseSource) -> Result<PhraseBatch, Error> {
        self.normalizer.normalize_source(source)
    }

    pub fn compound_text(&self, text: &str, batch: &PhraseBatch) -> Result<String, Error> {
        let compounder = TextCompounder::new(batch, self.config.concatenator)?;

        Ok(compounder.compound(text))
    }

    pub fn compound_texts(
        &self,
        texts: &[String],
        batch: &PhraseBatch,
    ) -> Result<Vec<String>, Error> {
        let compounder = TextCompounder::new(batch, self.config.concatenator)?;

        Ok(texts.iter().map(|text| compounder.compound(text)).collect())
    }

    /// Resolves the batch against a vocabulary built from `documents`.
    pub fn compound_tokens(
        &self,
        documents: &[TokenDocument],
        batch: &PhraseBatch,
    ) -> Result<Vec<TokenDocument>, Error> {
        let vocabulary = Vocabulary::from_documents(documents);

        debug!("Built vocabulary of {} token types", vocabulary.token_count());

        self.compound_tokens_with_vocabulary(documents, batch, &vocabulary)
    }

    /// Same as `compound_tokens`, with a vocabulary the caller has already built (and may
    /// reuse across calls).
    pub fn compound_tokens_with_vocabulary(
        &self,
        documents: &[TokenDocument],
        batch: &PhraseBatch,
        vocabulary: &Vocabulary,
    ) -> Result<Vec<TokenDocument>, Error> {
        let compounder = TokenCompounder::new(
            batch,
            vocabulary,
            self.config.concatenator,
            self.config.max_fixed_sequences,
        )?;

        Ok(documents
            .iter()
            .map(|document| compounder.compound(document))
            .collect())
    }
}
