use crate::models::PhraseSpec;

/// Orders phrases so that longer phrases are applied before shorter ones.
///
/// Compounding is not transactional: once a phrase has been merged its tokens can no longer
/// take part in another match. Applying phrases with more words first keeps a shorter pattern
/// (e.g. "gains tax") from consuming the words of a longer one (e.g. "capital gains tax").
///
/// ### Sorting Order:
/// - **Primary:** Word count, descending.
/// - **Secondary:** Phrases with equal word counts keep their input order (stable sort).
pub fn rank_phrases(mut phrases: Vec<PhraseSpec>) -> Vec<PhraseSpec> {
    phrases.sort_by(|a, b| b.word_count().cmp(&a.word_count()));

    phrases
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchMode;

    fn spec(phrase: &str) -> PhraseSpec {
        let words = phrase.split_whitespace().map(String::from).collect();
        PhraseSpec::new(words, MatchMode::Fixed, true).unwrap()
    }

    #[test]
    fn test_longer_phrases_first() {
        let ranked = rank_phrases(vec![
            spec("tax"),
            spec("income tax"),
            spec("capital gains tax"),
            spec("inheritance tax"),
        ]);

        let phrases: Vec<&str> = ranked.iter().map(|spec| spec.phrase()).collect();
        assert_eq!(
            phrases,
            vec!["capital gains tax", "income tax", "inheritance tax", "tax"]
        );
    }

    #[test]
    fn test_equal_lengths_are_stable() {
        let ranked = rank_phrases(vec![spec("b c"), spec("a b"), spec("z y")]);

        let phrases: Vec<&str> = ranked.iter().map(|spec| spec.phrase()).collect();
        assert_eq!(phrases, vec!["b c", "a b", "z y"]);
    }
}
