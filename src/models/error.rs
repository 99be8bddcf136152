use crate::types::WordCount;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// A phrase pattern failed to compile.
    PatternError { phrase: String, message: String },
    /// A phrase has no words, or more words than can be compounded.
    SpecLengthError { phrase: String, word_count: WordCount },
    /// No compounder handles the given input / phrase source combination.
    DispatchError(String),
    /// A phrase resolves to more fixed sequences than the configured limit.
    ExpansionLimitError { phrase: String, limit: usize },
    CsvError(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PatternError { phrase, message } => {
                write!(f, "Pattern Error: invalid phrase \"{}\": {}", phrase, message)
            }
            Error::SpecLengthError { phrase, word_count } => write!(
                f,
                "Spec Length Error: phrase \"{}\" has {} words",
                phrase, word_count
            ),
            Error::DispatchError(msg) => write!(f, "Dispatch Error: {}", msg),
            Error::ExpansionLimitError { phrase, limit } => write!(
                f,
                "Expansion Limit Error: phrase \"{}\" matches more than {} fixed sequences",
                phrase, limit
            ),
            Error::CsvError(msg) => write!(f, "CSV Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::CsvError(err.to_string())
    }
}
