use crate::models::{Error, PhraseBatch, Vocabulary};
use crate::types::{FixedSequence, Token, TokenDocument, WordCount};
use crate::utils::{dedup_vector, regex_to_fixed};
use log::debug;
use std::collections::HashMap;

/// Fixed sequences of one length, indexed by their first token.
struct SequenceTier {
    word_count: WordCount,
    by_first_token: HashMap<Token, Vec<FixedSequence>>,
}

/// Compounds phrases in tokenized documents by resolving them to fixed token sequences and
/// merging exact matches.
pub struct TokenCompounder {
    concatenator: String,
    tiers: Vec<SequenceTier>,
}

impl TokenCompounder {
    /// Resolves the whole batch against `vocabulary`. Any phrase exceeding
    /// `max_fixed_sequences` aborts the batch.
    pub fn new(
        batch: &PhraseBatch,
        vocabulary: &Vocabulary,
        concatenator: char,
        max_fixed_sequences: usize,
    ) -> Result<Self, Error> {
        let mut working_set: Vec<FixedSequence> = Vec::new();

        for spec in batch {
            working_set.extend(regex_to_fixed(spec, vocabulary, max_fixed_sequences)?);
        }

        let working_set = dedup_vector(&working_set);

        debug!(
            "Resolved {} phrases to {} fixed sequences over {} token types",
            batch.len(),
            working_set.len(),
            vocabulary.token_count()
        );

        Ok(Self {
            concatenator: concatenator.to_string(),
            tiers: Self::build_tiers(working_set),
        })
    }

    /// Number of fixed sequences that can produce a merge.
    pub fn sequence_count(&self) -> usize {
        self.tiers
            .iter()
            .flat_map(|tier| tier.by_first_token.values())
            .map(Vec::len)
            .sum()
    }

    /// Merges every matching run of tokens, longest sequences first. The result is never
    /// longer than `document`.
    pub fn compound(&self, document: &[Token]) -> TokenDocument {
        let mut output = document.to_vec();

        for tier in &self.tiers {
            output = self.merge_tier(&output, tier);
        }

        output
    }

    fn merge_tier(&self, document: &[Token], tier: &SequenceTier) -> TokenDocument {
        let mut output = Vec::with_capacity(document.len());
        let mut idx = 0;

        while idx < document.len() {
            let remaining = &document[idx..];

            let matched = tier
                .by_first_token
                .get(&document[idx])
                .and_then(|sequences| {
                    sequences
                        .iter()
                        .find(|sequence| remaining.starts_with(sequence.as_slice()))
                });

            match matched {
                Some(sequence) => {
                    output.push(sequence.join(&self.concatenator));
                    idx += tier.word_count;
                }
                None => {
                    output.push(document[idx].clone());
                    idx += 1;
                }
            }
        }

        output
    }

    fn build_tiers(working_set: Vec<FixedSequence>) -> Vec<SequenceTier> {
        let mut tiers: Vec<SequenceTier> = Vec::new();

        // Single tokens merge into themselves.
        for sequence in working_set.into_iter().filter(|sequence| sequence.len() > 1) {
            let word_count = sequence.len();

            let tier_idx = match tiers.iter().position(|tier| tier.word_count == word_count) {
                Some(tier_idx) => tier_idx,
                None => {
                    tiers.push(SequenceTier {
                        word_count,
                        by_first_token: HashMap::new(),
                    });
                    tiers.len() - 1
                }
            };

            tiers[tier_idx]
                .by_first_token
                .entry(sequence[0].clone())
                .or_default()
                .push(sequence);
        }

        tiers.sort_by(|a, b| b.word_count.cmp(&a.word_count));

        tiers
    }
}
