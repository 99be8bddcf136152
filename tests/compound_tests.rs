use phrase_compounder::{
    compound, compound_with_custom_config, CollocationRecord, CompounderConfig, Corpus, Error,
    MatchMode, PhraseSource, TokenDocument, DEFAULT_COMPOUNDER_CONFIG,
};
use std::collections::BTreeMap;

fn phrases(phrases: &[&str]) -> PhraseSource {
    PhraseSource::Phrases(phrases.iter().map(|phrase| phrase.to_string()).collect())
}

fn tokens(text: &str) -> TokenDocument {
    text.split_whitespace().map(String::from).collect()
}

fn compound_text(text: &str, source: &PhraseSource) -> String {
    match compound(&Corpus::Text(text.to_string()), source).unwrap() {
        Corpus::Text(text) => text,
        other => panic!("Expected text output, got {:?}", other),
    }
}

fn compound_tokens(documents: Vec<TokenDocument>, source: &PhraseSource) -> Vec<TokenDocument> {
    match compound(&Corpus::Tokens(documents), source).unwrap() {
        Corpus::Tokens(documents) => documents,
        other => panic!("Expected token output, got {:?}", other),
    }
}

#[cfg(test)]
mod text_compounding_tests {
    use super::*;

    #[test]
    fn test_capital_gains_example() {
        let source = phrases(&["tax", "income tax", "capital gains tax", "inheritance tax"]);

        assert_eq!(
            compound_text(
                "The new law included a capital gains tax, and an inheritance tax.",
                &source
            ),
            "The new law included a capital_gains_tax, and an inheritance_tax."
        );
    }

    #[test]
    fn test_longest_match_priority() {
        let source = phrases(&["gains tax", "capital gains tax"]);

        let output = compound_text("a capital gains tax was levied", &source);

        assert_eq!(output, "a capital_gains_tax was levied");
        assert!(!output.contains("capital gains_tax"));
    }

    #[test]
    fn test_case_insensitive_by_default() {
        assert_eq!(
            compound_text("new york City", &phrases(&["New York"])),
            "new_york City"
        );
    }

    #[test]
    fn test_case_sensitive_config() {
        let config = CompounderConfig {
            case_insensitive: false,
            ..*DEFAULT_COMPOUNDER_CONFIG
        };

        let output = compound_with_custom_config(
            &config,
            &Corpus::Text("new york and New York".to_string()),
            &phrases(&["New York"]),
        )
        .unwrap();

        assert_eq!(output, Corpus::Text("new york and New_York".to_string()));
    }

    #[test]
    fn test_custom_concatenator() {
        let config = CompounderConfig {
            concatenator: '+',
            ..*DEFAULT_COMPOUNDER_CONFIG
        };

        let output = compound_with_custom_config(
            &config,
            &Corpus::Text("capital gains tax".to_string()),
            &phrases(&["capital gains tax"]),
        )
        .unwrap();

        assert_eq!(output, Corpus::Text("capital+gains+tax".to_string()));
    }

    #[test]
    fn test_idempotence() {
        let source = phrases(&["tax", "income tax", "capital gains tax", "inheritance tax"]);
        let once = compound_text("income tax, capital gains tax and tax", &source);
        let twice = compound_text(&once, &source);

        assert_eq!(once, "income_tax, capital_gains_tax and tax");
        assert_eq!(twice, once);
    }

    #[test]
    fn test_phrases_spanning_line_breaks() {
        assert_eq!(
            compound_text("the new\nyork times", &phrases(&["new york"])),
            "the new_york times"
        );
    }

    #[test]
    fn test_dictionary_source() {
        let mut entries = BTreeMap::new();
        entries.insert(
            "countries".to_string(),
            vec!["united_states".to_string(), "united_kingdom".to_string()],
        );

        let output = compound_text(
            "The United States and the United Kingdom",
            &PhraseSource::Dictionary(entries),
        );

        assert_eq!(output, "The United_States and the United_Kingdom");
    }

    #[test]
    fn test_collocation_source() {
        let source = PhraseSource::Collocations(vec![
            CollocationRecord::bigram("new", "york"),
            CollocationRecord::trigram("new", "york", "city"),
        ]);

        assert_eq!(
            compound_text("New York City is in New York state", &source),
            "New_York_City is in New_York state"
        );
    }

    #[test]
    fn test_collocation_words_are_literal() {
        let source = PhraseSource::Collocations(vec![CollocationRecord::bigram("c.a", "tax")]);

        assert_eq!(
            compound_text("cba tax and c.a tax", &source),
            "cba tax and c.a_tax"
        );
    }

    #[test]
    fn test_texts_are_compounded_independently() {
        let output = compound(
            &Corpus::Texts(vec!["new york".to_string(), "york new".to_string()]),
            &phrases(&["new york"]),
        )
        .unwrap();

        assert_eq!(
            output,
            Corpus::Texts(vec!["new_york".to_string(), "york new".to_string()])
        );
    }

    #[test]
    fn test_phrase_ending_in_punctuation() {
        assert_eq!(
            compound_text("we learn c++ today", &phrases(&["learn c++"])),
            "we learn_c++ today"
        );
    }

    #[test]
    fn test_wildcard_agrees_with_token_mode() {
        let source = phrases(&["* tax"]);
        let once = compound_text("income tax tax", &source);

        assert_eq!(once, "income_tax tax");
        assert_eq!(compound_text(&once, &source), once);
        assert_eq!(
            compound_tokens(vec![tokens("income tax tax")], &source),
            vec![tokens(&once)]
        );
    }

    #[test]
    fn test_regex_words_may_name_their_groups() {
        let config = CompounderConfig {
            match_mode: MatchMode::Regex,
            ..*DEFAULT_COMPOUNDER_CONFIG
        };

        let output = compound_with_custom_config(
            &config,
            &Corpus::Text("new york and new jersey".to_string()),
            &phrases(&["(?P<w0>new) (?P<w1>york|jersey)"]),
        )
        .unwrap();

        assert_eq!(
            output,
            Corpus::Text("new_york and new_jersey".to_string())
        );
    }

    #[test]
    fn test_unmatched_phrase_leaves_text_unchanged() {
        let text = "nothing to compound here";

        assert_eq!(compound_text(text, &phrases(&["new york"])), text);
    }
}

#[cfg(test)]
mod token_compounding_tests {
    use super::*;

    #[test]
    fn test_longest_match_priority() {
        let output = compound_tokens(
            vec![tokens("a capital gains tax was levied")],
            &phrases(&["gains tax", "capital gains tax"]),
        );

        assert_eq!(output, vec![tokens("a capital_gains_tax was levied")]);
    }

    #[test]
    fn test_length_never_increases() {
        let documents = vec![
            tokens("new york new york new"),
            tokens("york"),
            tokens(""),
            tokens("new jersey and new hampshire"),
        ];

        let output = compound_tokens(documents.clone(), &phrases(&["new *", "new york new"]));

        assert_eq!(output.len(), documents.len());
        for (before, after) in documents.iter().zip(&output) {
            assert!(after.len() <= before.len());
        }
        assert_eq!(output[0], tokens("new_york_new york new"));
        assert_eq!(output[3], tokens("new_jersey and new_hampshire"));
    }

    #[test]
    fn test_idempotence() {
        let source = phrases(&["capital gains tax", "new york"]);
        let once = compound_tokens(vec![tokens("capital gains tax in New York")], &source);
        let twice = compound_tokens(once.clone(), &source);

        assert_eq!(once, vec![tokens("capital_gains_tax in New_York")]);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_wildcard_idempotence() {
        let source = phrases(&["* tax"]);
        let once = compound_tokens(vec![tokens("income tax tax")], &source);
        let twice = compound_tokens(once.clone(), &source);

        assert_eq!(once, vec![tokens("income_tax tax")]);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_phrase_ending_in_punctuation() {
        assert_eq!(
            compound_tokens(vec![tokens("we learn c++ today")], &phrases(&["learn c++"])),
            vec![tokens("we learn_c++ today")]
        );
    }

    #[test]
    fn test_phrase_missing_from_vocabulary() {
        let documents = vec![tokens("nothing to compound here")];

        assert_eq!(
            compound_tokens(documents.clone(), &phrases(&["new york"])),
            documents
        );
    }

    #[test]
    fn test_word_patterns_source() {
        let config = CompounderConfig {
            match_mode: MatchMode::Regex,
            ..*DEFAULT_COMPOUNDER_CONFIG
        };
        let source = PhraseSource::WordPatterns(vec![vec![
            "income|capital".to_string(),
            "tax(es)?".to_string(),
        ]]);

        let output = compound_with_custom_config(
            &config,
            &Corpus::Tokens(vec![tokens("income taxes and capital tax")]),
            &source,
        )
        .unwrap();

        assert_eq!(
            output,
            Corpus::Tokens(vec![tokens("income_taxes and capital_tax")])
        );
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_phrase_longer_than_nine_words() {
        let result = compound(
            &Corpus::Text("one".to_string()),
            &phrases(&["one two three four five six seven eight nine ten"]),
        );

        assert!(matches!(
            result,
            Err(Error::SpecLengthError { word_count: 10, .. })
        ));
    }

    #[test]
    fn test_invalid_pattern_aborts_whole_batch() {
        let config = CompounderConfig {
            match_mode: MatchMode::Regex,
            ..*DEFAULT_COMPOUNDER_CONFIG
        };

        let result = compound_with_custom_config(
            &config,
            &Corpus::Text("new york".to_string()),
            &phrases(&["new york", "capital (gains"]),
        );

        match result {
            Err(Error::PatternError { phrase, .. }) => assert_eq!(phrase, "capital (gains"),
            other => panic!("Expected PatternError, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_combination() {
        let result = compound(
            &Corpus::Tokens(vec![tokens("new york")]),
            &PhraseSource::Collocations(vec![CollocationRecord::bigram("new", "york")]),
        );

        assert!(matches!(result, Err(Error::DispatchError(_))));
    }

    #[test]
    fn test_expansion_limit() {
        let config = CompounderConfig {
            max_fixed_sequences: 3,
            ..*DEFAULT_COMPOUNDER_CONFIG
        };

        let result = compound_with_custom_config(
            &config,
            &Corpus::Tokens(vec![tokens("a b c d")]),
            &phrases(&["* *"]),
        );

        assert!(matches!(
            result,
            Err(Error::ExpansionLimitError { limit: 3, .. })
        ));
    }

    #[test]
    fn test_error_messages_name_the_phrase() {
        let error = Error::SpecLengthError {
            phrase: "a b".to_string(),
            word_count: 2,
        };

        assert_eq!(
            error.to_string(),
            "Spec Length Error: phrase \"a b\" has 2 words"
        );
    }
}
