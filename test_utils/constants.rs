use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static TEST_COLLOCATIONS_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_data_files", "test_collocations.csv"));

pub const PHRASE_PREFIX: &str = "PHRASE:";
pub const MODE_PREFIX: &str = "MODE:";
pub const TOKENS_PREFIX: &str = "TOKENS:";
pub const EXPECTED_PREFIX: &str = "EXPECTED:";
pub const COMMENT_PREFIX: &str = "COMMENT:";
