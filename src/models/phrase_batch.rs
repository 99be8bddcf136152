use crate::models::PhraseSpec;
use crate::utils::rank_phrases;

/// A set of phrases held in application order: longest phrases first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseBatch {
    phrases: Vec<PhraseSpec>,
}

impl PhraseBatch {
    pub fn new(phrases: Vec<PhraseSpec>) -> Self {
        Self {
            phrases: rank_phrases(phrases),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PhraseSpec> {
        self.phrases.iter()
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl<'a> IntoIterator for &'a PhraseBatch {
    type Item = &'a PhraseSpec;
    type IntoIter = std::slice::Iter<'a, PhraseSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
