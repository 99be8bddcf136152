use crate::models::phrase_spec::is_word_char;
use crate::models::{Error, PhraseBatch, PhraseSpec};
use log::trace;
use regex::{Captures, Regex};

struct CompiledPhrase {
    regex: Regex,
    group_names: Vec<String>,
}

/// Compounds phrases in running text by regex substitution, one pass per phrase in batch
/// order.
pub struct TextCompounder {
    concatenator: char,
    joiner: String,
    phrases: Vec<CompiledPhrase>,
}

impl TextCompounder {
    /// Compiles every phrase of the batch. Nothing is substituted if any phrase fails.
    pub fn new(batch: &PhraseBatch, concatenator: char) -> Result<Self, Error> {
        let phrases = batch
            .iter()
            .map(|spec| -> Result<CompiledPhrase, Error> {
                Ok(CompiledPhrase {
                    regex: spec.text_regex()?,
                    group_names: (0..spec.word_count())
                        .map(PhraseSpec::word_group_name)
                        .collect(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            concatenator,
            joiner: concatenator.to_string(),
            phrases,
        })
    }

    /// Each pass operates on the output of the previous one, so earlier (longer) phrases
    /// claim their words first.
    pub fn compound(&self, text: &str) -> String {
        let mut output = text.to_string();

        for phrase in &self.phrases {
            trace!("Applying {}", phrase.regex.as_str());

            output = self.apply_phrase(phrase, &output);
        }

        output
    }

    /// Replaces every non-overlapping match that starts and ends on a token edge. A match
    /// that does not is retried one character further on.
    fn apply_phrase(&self, phrase: &CompiledPhrase, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        let mut copied = 0;
        let mut pos = 0;

        while pos <= text.len() {
            let Some(caps) = phrase.regex.captures_at(text, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            let (start, end) = (whole.start(), whole.end());

            if start == end || !self.is_token_match(text, start, end) {
                pos = next_char_boundary(text, start);
                continue;
            }

            output.push_str(&text[copied..start]);
            output.push_str(&self.join_words(phrase, &caps));
            copied = end;
            pos = end;
        }

        output.push_str(&text[copied..]);
        output
    }

    fn join_words(&self, phrase: &CompiledPhrase, caps: &Captures) -> String {
        phrase
            .group_names
            .iter()
            .filter_map(|name| caps.name(name))
            .map(|word| word.as_str())
            .collect::<Vec<_>>()
            .join(&self.joiner)
    }

    fn is_token_match(&self, text: &str, start: usize, end: usize) -> bool {
        self.is_token_edge(text[..start].chars().next_back())
            && self.is_token_edge(text[end..].chars().next())
    }

    /// A match may not continue a word, nor attach to a previous compound.
    fn is_token_edge(&self, outside: Option<char>) -> bool {
        match outside {
            None => true,
            Some(c) => c != self.concatenator && !is_word_char(c),
        }
    }
}

fn next_char_boundary(text: &str, idx: usize) -> usize {
    text[idx..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| idx + c.len_utf8())
}
