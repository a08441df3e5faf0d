//! Tokenizer edge cases beyond the module's own inline tests.

use lexirank::tokenize::parse;

#[test]
fn digits_act_as_separators_not_tokens() {
    let tokens = parse("room101 number");
    assert!(tokens.iter().all(|t| t.chars().all(|c| c.is_alphabetic())));
    assert!(tokens.iter().any(|t| t == "room"));
}

#[test]
fn purely_numeric_text_yields_no_tokens() {
    assert!(parse("1234 5678").is_empty());
}

#[test]
fn mixed_case_normalizes_identically() {
    assert_eq!(parse("Quick BROWN Fox"), parse("quick brown fox"));
}

#[test]
fn empty_input_yields_no_tokens() {
    assert!(parse("").is_empty());
    assert!(parse("   \t\n  ").is_empty());
}
