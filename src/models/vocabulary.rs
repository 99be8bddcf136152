use crate::types::{Token, TokenDocument, TokenId, TokenRef};
use regex::Regex;
use std::collections::HashMap;

/// The distinct token types of a tokenized corpus, in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    token_map: HashMap<Token, TokenId>,
    tokens: Vec<Token>,
}

impl Vocabulary {
    /// Creates an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the vocabulary of every token across all documents.
    pub fn from_documents(documents: &[TokenDocument]) -> Self {
        let mut vocabulary = Self::new();

        for document in documents {
            for token in document {
                vocabulary.upsert_token(token);
            }
        }

        vocabulary
    }

    /// Adds a token to the vocabulary if it doesn't exist,
    /// and returns its unique ID
    pub fn upsert_token(&mut self, token: &TokenRef) -> TokenId {
        if let Some(&id) = self.token_map.get(token) {
            id
        } else {
            let id = self.tokens.len();
            self.token_map.insert(token.to_string(), id);
            self.tokens.push(token.to_string());
            id
        }
    }

    /// Gets the total number of unique tokens
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenRef> {
        self.tokens.iter().map(|token| token.as_str())
    }

    /// Token types matched by `regex`, in vocabulary order.
    pub fn matching(&self, regex: &Regex) -> Vec<&TokenRef> {
        self.iter().filter(|token| regex.is_match(token)).collect()
    }
}

impl<'a> FromIterator<&'a TokenRef> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = &'a TokenRef>>(iter: I) -> Self {
        let mut vocabulary = Self::new();

        for token in iter {
            vocabulary.upsert_token(token);
        }

        vocabulary
    }
}
