use crate::models::CollocationRecord;

/// Sorts collocation records so that trigrams precede bigrams.
///
/// ### Sorting Order:
/// - **Primary:** `word3`, descending. Bigrams have an empty `word3` and therefore sort last.
/// - **Secondary:** `word1`, ascending.
pub fn sort_collocations(records: &mut [CollocationRecord]) {
    records.sort_by(|a, b| {
        b.word3
            .cmp(&a.word3)
            .then_with(|| a.word1.cmp(&b.word1))
    });
}
