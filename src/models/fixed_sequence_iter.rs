use crate::types::{FixedSequence, TokenRef};

/// Lazily enumerates the cartesian product of per-position candidate tokens.
///
/// Positions advance like an odometer, rightmost first, so sequences come out in the order of
/// the candidate lists.
pub struct FixedSequenceIter<'a> {
    candidates: Vec<Vec<&'a TokenRef>>,
    indices: Vec<usize>,
    exhausted: bool,
}

impl<'a> FixedSequenceIter<'a> {
    pub fn new(candidates: Vec<Vec<&'a TokenRef>>) -> Self {
        let exhausted = candidates.is_empty() || candidates.iter().any(|c| c.is_empty());
        let indices = vec![0; candidates.len()];

        Self {
            candidates,
            indices,
            exhausted,
        }
    }

    /// Number of sequences the full product contains, or `None` on overflow.
    pub fn total(&self) -> Option<usize> {
        if self.candidates.is_empty() {
            return Some(0);
        }

        self.candidates
            .iter()
            .try_fold(1usize, |acc, position| acc.checked_mul(position.len()))
    }

    fn advance(&mut self) {
        for position in (0..self.indices.len()).rev() {
            self.indices[position] += 1;

            if self.indices[position] < self.candidates[position].len() {
                return;
            }

            self.indices[position] = 0;
        }

        self.exhausted = true;
    }
}

impl<'a> Iterator for FixedSequenceIter<'a> {
    type Item = FixedSequence;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let sequence = self
            .indices
            .iter()
            .zip(&self.candidates)
            .map(|(&idx, position)| position[idx].to_string())
            .collect();

        self.advance();

        Some(sequence)
    }
}
