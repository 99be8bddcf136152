use phrase_compounder::{
    compound_with_custom_config, CompounderConfig, Corpus, MatchMode, PhraseSource,
    TokenDocument, DEFAULT_COMPOUNDER_CONFIG,
};
use std::path::{Path, PathBuf};
use std::{fs, str::FromStr};

pub mod constants;
use constants::{
    COMMENT_PREFIX, EXPECTED_PREFIX, MODE_PREFIX, PHRASE_PREFIX, TEST_FILES_DIRECTORY,
    TOKENS_PREFIX,
};

/// A compounding scenario read from a test file.
///
/// Lines starting with `PHRASE:`, `MODE:`, `TOKENS:`, `EXPECTED:` or `COMMENT:` are
/// directives; every other line is input text.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub path: PathBuf,
    pub phrases: Vec<String>,
    pub match_mode: MatchMode,
    pub tokens: bool,
    pub input: Vec<String>,
    pub expected: Vec<String>,
}

// Helper function to get all values for a directive in the text file
fn get_directive_values(content: &str, prefix: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            line.trim_start()
                .strip_prefix(prefix)
                .map(|value| value.trim().to_string())
        })
        .collect()
}

fn is_directive(line: &str) -> bool {
    let line = line.trim_start();

    [
        PHRASE_PREFIX,
        MODE_PREFIX,
        TOKENS_PREFIX,
        EXPECTED_PREFIX,
        COMMENT_PREFIX,
    ]
    .iter()
    .any(|prefix| line.starts_with(prefix))
}

pub fn load_test_case(file_path: &Path) -> TestCase {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    let match_mode = get_directive_values(&content, MODE_PREFIX)
        .first()
        .map(|mode| MatchMode::from_str(mode).expect("Invalid MODE directive"))
        .unwrap_or(DEFAULT_COMPOUNDER_CONFIG.match_mode);

    let tokens = get_directive_values(&content, TOKENS_PREFIX)
        .first()
        .map_or(false, |value| value == "true");

    let input = content
        .lines()
        .filter(|line| !is_directive(line) && !line.trim().is_empty())
        .map(String::from)
        .collect();

    TestCase {
        path: file_path.to_path_buf(),
        phrases: get_directive_values(&content, PHRASE_PREFIX),
        match_mode,
        tokens,
        input,
        expected: get_directive_values(&content, EXPECTED_PREFIX),
    }
}

/// All `.txt` test files, sorted by name.
pub fn get_test_files() -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(&*TEST_FILES_DIRECTORY)
        .expect("Failed to read test files directory")
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().map_or(false, |ext| ext == "txt"))
        .collect();

    files.sort();
    files
}

fn to_token_documents(lines: &[String]) -> Vec<TokenDocument> {
    lines
        .iter()
        .map(|line| line.split_whitespace().map(String::from).collect())
        .collect()
}

/// Compounds the test case input and asserts the output equals the `EXPECTED:` lines.
pub fn run_test_for_file(test_file_path: &Path) {
    let test_case = load_test_case(test_file_path);

    let config = CompounderConfig {
        match_mode: test_case.match_mode,
        ..*DEFAULT_COMPOUNDER_CONFIG
    };

    let corpus = if test_case.tokens {
        Corpus::Tokens(to_token_documents(&test_case.input))
    } else {
        Corpus::Texts(test_case.input.clone())
    };

    let expected = if test_case.tokens {
        Corpus::Tokens(to_token_documents(&test_case.expected))
    } else {
        Corpus::Texts(test_case.expected.clone())
    };

    let source = PhraseSource::Phrases(test_case.phrases.clone());

    let results = compound_with_custom_config(&config, &corpus, &source)
        .unwrap_or_else(|e| panic!("{} - Failed to compound: {}", test_file_path.display(), e));

    assert_eq!(
        results,
        expected,
        "{} - Unexpected compounding result",
        test_file_path.display()
    );

    // A second pass must not change anything.
    let second_pass = compound_with_custom_config(&config, &results, &source)
        .unwrap_or_else(|e| panic!("{} - Failed to recompound: {}", test_file_path.display(), e));

    assert_eq!(
        second_pass,
        results,
        "{} - Compounding is not idempotent",
        test_file_path.display()
    );
}
