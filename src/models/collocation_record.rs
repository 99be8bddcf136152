use crate::types::PhraseText;

/// An n-gram produced by collocation scoring. Only the word columns are used for compounding;
/// `word3` is empty for bigrams.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollocationRecord {
    pub word1: String,
    pub word2: String,
    pub word3: String,
    pub count: u64,
    pub statistic: f64,
}

impl CollocationRecord {
    pub fn bigram(word1: &str, word2: &str) -> Self {
        Self {
            word1: word1.to_string(),
            word2: word2.to_string(),
            ..Default::default()
        }
    }

    pub fn trigram(word1: &str, word2: &str, word3: &str) -> Self {
        Self {
            word1: word1.to_string(),
            word2: word2.to_string(),
            word3: word3.to_string(),
            ..Default::default()
        }
    }

    /// Joins the word columns with single spaces, dropping an empty `word3`.
    pub fn to_phrase_text(&self) -> PhraseText {
        [&self.word1, &self.word2, &self.word3]
            .iter()
            .map(|word| word.trim())
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
