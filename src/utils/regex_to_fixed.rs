use crate::models::{Error, FixedSequenceIter, PhraseSpec, Vocabulary};
use crate::types::{FixedSequence, TokenRef};
use log::trace;

/// Resolves a phrase of per-position patterns into the concrete token sequences it can match
/// within `vocabulary`.
///
/// Each position is matched against every token type; the result is the cartesian product of
/// the per-position matches. A position with no matches means the phrase cannot occur, which
/// yields an empty result rather than an error.
///
/// The product is sized before it is generated. When it would exceed `max_fixed_sequences`
/// the phrase fails with `ExpansionLimitError` instead of being partially applied.
///
/// # Example
/// ```
/// use phrase_compounder::{regex_to_fixed, MatchMode, PhraseSpec, Vocabulary};
///
/// let vocabulary: Vocabulary = ["new", "york", "jersey", "city"].into_iter().collect();
/// let spec = PhraseSpec::new(vec!["new".into(), "*e*".into()], MatchMode::Glob, true).unwrap();
///
/// let sequences = regex_to_fixed(&spec, &vocabulary, 100).unwrap();
/// assert_eq!(sequences, vec![vec!["new", "new"], vec!["new", "jersey"]]);
/// ```
pub fn regex_to_fixed(
    spec: &PhraseSpec,
    vocabulary: &Vocabulary,
    max_fixed_sequences: usize,
) -> Result<Vec<FixedSequence>, Error> {
    let regexes = spec.token_regexes()?;

    let candidates: Vec<Vec<&TokenRef>> = regexes
        .iter()
        .map(|regex| vocabulary.matching(regex))
        .collect();

    if let Some(position) = candidates.iter().position(|matches| matches.is_empty()) {
        trace!(
            "Phrase \"{}\" has no vocabulary match at position {}",
            spec.phrase(),
            position
        );
        return Ok(Vec::new());
    }

    let iter = FixedSequenceIter::new(candidates);

    match iter.total() {
        Some(total) if total <= max_fixed_sequences => {
            trace!(
                "Phrase \"{}\" resolves to {} fixed sequences",
                spec.phrase(),
                total
            );
            Ok(iter.collect())
        }
        _ => Err(Error::ExpansionLimitError {
            phrase: spec.phrase().to_string(),
            limit: max_fixed_sequences,
        }),
    }
}
