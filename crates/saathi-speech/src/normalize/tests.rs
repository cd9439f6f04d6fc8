//! End-to-end tests for the normalization pipeline.

use super::*;

fn insensitive() -> TextNormalizer {
    TextNormalizer::new(NormalizerOptions {
        case_matching: CaseMatching::Insensitive,
        ..NormalizerOptions::default()
    })
}

#[test]
fn contractions_and_numbers() {
    assert_eq!(
        normalize_for_speech("i can't believe it's 3 dollars."),
        "i cannot believe it is three dollars."
    );
}

#[test]
fn commas_become_periods() {
    assert_eq!(normalize_for_speech("well, that is nice"), "well. that is nice");
}

#[test]
fn markdown_is_scrubbed() {
    assert_eq!(
        normalize_for_speech("## Weather\n- **sunny**, 24 degrees"),
        " Weather\n sunny. twenty four degrees"
    );
}

#[test]
fn abbreviations_and_symbols() {
    assert_eq!(
        normalize_for_speech("dr. smith & mr. jones scored 90 %"),
        "doctor smith and mister jones scored ninety percent"
    );
}

#[test]
fn exact_case_leaves_capitalized_contractions_unexpanded() {
    // The tables are lowercase; capitalized forms lose their apostrophe only.
    assert_eq!(normalize_for_speech("It's fine, I'm sure."), "Its fine. Im sure.");
}

#[test]
fn insensitive_case_expands_and_keeps_capital() {
    assert_eq!(
        insensitive().normalize("It's fine, I'm sure. Dr. Who said so."),
        "It is fine. I am sure. Doctor Who said so."
    );
}

#[test]
fn code_blocks_are_spoken_by_default() {
    assert_eq!(
        normalize_for_speech("run ```pip install openai``` now"),
        "run pip install openai now"
    );
}

#[test]
fn code_blocks_can_be_skipped() {
    let normalizer = TextNormalizer::new(NormalizerOptions {
        code_blocks: CodeBlockPolicy::Skip,
        ..NormalizerOptions::default()
    });
    assert_eq!(
        normalizer.normalize("here you go ```python\nprint(1)\n``` done"),
        "here you go  done"
    );
}

#[test]
fn normalization_is_idempotent() {
    let inputs = [
        "i can't believe it's 3 dollars.",
        "well, that is nice",
        "i cannot believe it is three dollars.",
        "dr. smith, etc, and 1005 people & 2 dogs!",
        "It's **bold**, isn't it? 007 agents = 12 + 30",
        "so. already. substituted.",
        "",
    ];
    for normalizer in [TextNormalizer::default(), insensitive()] {
        for input in inputs {
            let once = normalizer.normalize(input);
            let twice = normalizer.normalize(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }
}

#[test]
fn digit_runs_become_cardinal_words() {
    for (n, words) in [(7u128, "seven"), (120, "one hundred and twenty"), (2024, "two thousand and twenty four")] {
        let out = normalize_for_speech(&format!("about {n} items"));
        assert!(out.contains(words), "{out:?} lacks {words:?}");
        assert!(!out.contains(&n.to_string()), "{out:?} still has {n}");
    }
}

#[test]
fn thousands_separator_splits_the_number() {
    // the comma is a pause, so "000" is its own leading-zero run
    assert_eq!(
        normalize_for_speech("population 10,000"),
        "population ten.zero zero zero"
    );
}

#[test]
fn oversized_numbers_pass_through() {
    let huge = "1".repeat(45);
    let out = normalize_for_speech(&format!("pi is {huge}"));
    assert_eq!(out, format!("pi is {huge}"));
}

#[test]
fn output_alphabet_is_speech_safe() {
    let out = normalize_for_speech("#1 `x` <b>y</b> ~z~ it's 50% [link](http://a.b/c) @home");
    for c in out.chars() {
        assert!(
            c.is_alphanumeric() || c == '_' || c.is_whitespace() || matches!(c, '.' | '!' | '?'),
            "unexpected {c:?} in {out:?}"
        );
    }
}

#[test]
fn passes_run_in_documented_order() {
    assert_eq!(
        PASSES,
        [
            Pass::StructuralScrub,
            Pass::ContractionExpansion,
            Pass::AbbreviationExpansion,
            Pass::NumeralsToWords,
            Pass::PauseSubstitution,
        ]
    );
}

#[test]
fn single_pass_can_be_applied() {
    let normalizer = TextNormalizer::default();
    assert_eq!(normalizer.apply(Pass::PauseSubstitution, "a, b"), "a. b");
    assert_eq!(normalizer.apply(Pass::NumeralsToWords, "a, 2"), "a, two");
}

#[test]
fn options_from_config() {
    let config = saathi_config::schema::SpeechConfig {
        case_matching: CaseMatching::Insensitive,
        code_blocks: CodeBlockPolicy::Skip,
        ..Default::default()
    };
    let options = NormalizerOptions::from_config(&config);
    assert_eq!(options.case_matching, CaseMatching::Insensitive);
    assert_eq!(options.code_blocks, CodeBlockPolicy::Skip);
}
