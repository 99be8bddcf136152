use std::fmt;
use std::str::FromStr;

/// How the words of a phrase are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Literal words. `*` and `?` are still honored as wildcards.
    Fixed,
    /// Glob words, where `*` and `?` match non-whitespace characters.
    Glob,
    /// Each word is a regular expression used verbatim.
    Regex,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Fixed => write!(f, "fixed"),
            MatchMode::Glob => write!(f, "glob"),
            MatchMode::Regex => write!(f, "regex"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(MatchMode::Fixed),
            "glob" => Ok(MatchMode::Glob),
            "regex" => Ok(MatchMode::Regex),
            other => Err(format!(
                "unknown match mode \"{}\" (expected fixed, glob or regex)",
                other
            )),
        }
    }
}
