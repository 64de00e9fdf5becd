use super::*;

#[test]
fn test_lead_truncates_words() {
    assert_eq!(lead("one two three four", 2), "one two");
}

#[test]
fn test_lead_joins_lines() {
    assert_eq!(lead("Sea views\nand  sunsets", 10), "Sea views and sunsets");
}

#[test]
fn test_lead_empty() {
    assert_eq!(lead("", 5), "");
    assert_eq!(lead("words here", 0), "");
}

#[test]
fn test_stub_summarizer() {
    let summarizer = TextSummarizer::load(SummarizerConfig::stub()).expect("stub loads");
    assert!(summarizer.is_stub());
    assert!(format!("{:?}", summarizer).contains("Lead"));

    let text = (1..=100).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
    let summary = summarizer.summarize(&text, 64, 20).expect("summarize");
    assert_eq!(summary.split_whitespace().count(), 64);
    assert!(summary.starts_with("w1 w2"));
}

#[test]
fn test_stub_short_text_kept_whole() {
    let summary = TextSummarizer::stub()
        .summarize("Old port, fish market.", 64, 20)
        .expect("summarize");
    assert_eq!(summary, "Old port, fish market.");
}

#[test]
fn test_invalid_length() {
    let err = TextSummarizer::stub().summarize("text", 10, 20).unwrap_err();
    assert!(matches!(
        err,
        SummarizeError::InvalidLength {
            max_len: 10,
            min_len: 20
        }
    ));
}

#[test]
fn test_config_validation() {
    assert!(SummarizerConfig::stub().validate().is_ok());

    let missing = SummarizerConfig::new("/nonexistent/t5-small");
    assert!(matches!(
        missing.validate(),
        Err(SummarizeError::ModelNotFound { .. })
    ));

    let zero = SummarizerConfig {
        max_input_tokens: 0,
        ..SummarizerConfig::stub()
    };
    assert!(matches!(
        zero.validate(),
        Err(SummarizeError::InvalidConfig { .. })
    ));
}

#[test]
fn test_load_fails_without_model_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = TextSummarizer::load(SummarizerConfig::new(dir.path())).unwrap_err();
    assert!(matches!(err, SummarizeError::ModelLoadFailed { .. }));
}

#[test]
fn test_banned_ngram_tokens() {
    // "a b c a b" -> next "c" would repeat trigram "a b c"
    let tokens = [1, 2, 3, 1, 2];
    let banned = banned_ngram_tokens(&tokens, 3);
    assert_eq!(banned.len(), 1);
    assert!(banned.contains(&3));
}

#[test]
fn test_banned_ngram_tokens_short_history() {
    assert!(banned_ngram_tokens(&[], 3).is_empty());
    assert!(banned_ngram_tokens(&[7], 3).is_empty());
    assert!(banned_ngram_tokens(&[7, 8], 3).is_empty());
}

#[test]
fn test_banned_ngram_tokens_multiple_continuations() {
    let tokens = [5, 6, 1, 5, 6, 2, 5, 6];
    let banned = banned_ngram_tokens(&tokens, 3);
    assert!(banned.contains(&1));
    assert!(banned.contains(&2));
    assert_eq!(banned.len(), 2);
}

#[test]
fn test_argmax_skips_non_finite() {
    assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some(1));
    assert_eq!(argmax(&[f32::NEG_INFINITY, -1.0, f32::NAN]), Some(1));
    assert_eq!(argmax(&[f32::NEG_INFINITY]), None);
    assert_eq!(argmax(&[]), None);
}

#[test]
fn test_task_prefix() {
    assert_eq!(TASK_PREFIX, "summarize: ");
    assert_eq!(NO_REPEAT_NGRAM, 3);
}
