use clap::Parser;
use log::{error, info};
use phrase_compounder::{
    compound_with_custom_config, read_collocation_table_from_path, CompounderConfig, Corpus,
    Error, MatchMode, PhraseSource, DEFAULT_COMPOUNDER_CONFIG,
};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Joins multi-word phrases read from stdin into single tokens.
#[derive(Parser, Debug)]
#[command(name = "phrase-compounder-cli", version)]
struct Args {
    /// Phrase to compound (repeatable)
    #[arg(short, long = "phrase")]
    phrases: Vec<String>,

    /// File with one phrase per line
    #[arg(long)]
    phrases_file: Option<PathBuf>,

    /// CSV collocation table (word1,word2[,word3]); `.gz` files are decompressed
    #[arg(long, conflicts_with_all = ["phrases", "phrases_file", "tokens"])]
    collocations: Option<PathBuf>,

    /// Character joining the words of a compound token
    #[arg(short, long, default_value_t = DEFAULT_COMPOUNDER_CONFIG.concatenator)]
    concatenator: char,

    /// How phrase words are interpreted: fixed, glob or regex
    #[arg(short, long, default_value_t = DEFAULT_COMPOUNDER_CONFIG.match_mode)]
    mode: MatchMode,

    /// Match case exactly
    #[arg(long)]
    case_sensitive: bool,

    /// Treat each input line as a whitespace-tokenized document
    #[arg(long)]
    tokens: bool,

    /// Upper bound on fixed sequences per phrase in token mode
    #[arg(long, default_value_t = DEFAULT_COMPOUNDER_CONFIG.max_fixed_sequences)]
    max_fixed_sequences: usize,
}

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("Error compounding phrases: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let config = CompounderConfig {
        concatenator: args.concatenator,
        match_mode: args.mode,
        case_insensitive: !args.case_sensitive,
        max_fixed_sequences: args.max_fixed_sequences,
    };

    let source = read_phrase_source(args)?;

    // Read the input text from stdin
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let corpus = if args.tokens {
        Corpus::Tokens(
            input
                .lines()
                .map(|line| line.split_whitespace().map(String::from).collect())
                .collect(),
        )
    } else {
        Corpus::Text(input)
    };

    info!("Compounding {} with {} settings", corpus, config.match_mode);

    match compound_with_custom_config(&config, &corpus, &source)? {
        Corpus::Text(text) => print!("{}", text),
        Corpus::Texts(texts) => {
            for text in texts {
                println!("{}", text);
            }
        }
        Corpus::Tokens(documents) => {
            for document in documents {
                println!("{}", document.join(" "));
            }
        }
    }

    Ok(())
}

fn read_phrase_source(args: &Args) -> Result<PhraseSource, Error> {
    if let Some(path) = &args.collocations {
        return Ok(PhraseSource::Collocations(read_collocation_table_from_path(
            path,
        )?));
    }

    let mut phrases = args.phrases.clone();

    if let Some(path) = &args.phrases_file {
        phrases.extend(
            fs::read_to_string(path)?
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );
    }

    Ok(PhraseSource::Phrases(phrases))
}
