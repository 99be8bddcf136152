use crate::types::TokenDocument;
use std::fmt;

/// Input to compounding. Output always has the same variant as the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Corpus {
    Text(String),
    /// One string per document.
    Texts(Vec<String>),
    /// One token sequence per document.
    Tokens(Vec<TokenDocument>),
}

impl Corpus {
    pub fn kind(&self) -> &'static str {
        match self {
            Corpus::Text(_) => "text",
            Corpus::Texts(_) => "texts",
            Corpus::Tokens(_) => "tokens",
        }
    }

    pub fn is_tokenized(&self) -> bool {
        matches!(self, Corpus::Tokens(_))
    }
}

impl fmt::Display for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}
