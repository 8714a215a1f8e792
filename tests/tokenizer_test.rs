//! Tests for the concrete tokenizer strategies and their streams.

use bragi::{SentenceTokenizer, TokenSpan, Tokenizer, Unit, WordTokenizer};

// ============================================================================
// One-shot splitting
// ============================================================================

#[test]
fn word_tokenizer_returns_plain_spans() {
    let spans = WordTokenizer::new().tokenize("quick brown fox");
    assert_eq!(spans.len(), 3);
    assert!(spans.iter().all(|s| matches!(s, TokenSpan::Plain(_))));
}

#[test]
fn sentence_tokenizer_returns_positioned_spans() {
    let spans = SentenceTokenizer::new().tokenize("One. Two.");
    assert_eq!(spans.len(), 2);
    assert!(
        spans
            .iter()
            .all(|s| matches!(s, TokenSpan::Positioned { .. }))
    );
}

#[test]
fn sentence_offsets_are_sliceable() {
    let text = "First one. Second, with 3.14 inside! Partial tai";
    let spans = SentenceTokenizer::new().tokenize(text);

    let mut rest = text;
    let mut consumed = 0;
    for span in &spans {
        if let TokenSpan::Positioned { text: t, end, .. } = span {
            rest = &text[*end..];
            assert_eq!(text[consumed..*end].trim(), t);
            consumed = *end;
        }
    }
    assert!(rest.is_empty());
}

// ============================================================================
// stream() integration
// ============================================================================

#[tokio::test]
async fn sentence_stream_emits_whole_sentences() {
    let mut stream = SentenceTokenizer::new()
        .min_token_length(8)
        .min_context_length(0)
        .stream()
        .unwrap();

    stream.push_text("This is the first sentence. This is the sec").unwrap();
    stream.push_text("ond sentence. And a tail").unwrap();
    stream.end_input().unwrap();

    let mut tokens = Vec::new();
    while let Some(unit) = stream.next().await {
        tokens.push(unit.token);
    }
    assert_eq!(
        tokens,
        [
            "This is the first sentence.",
            "This is the second sentence.",
            "And a tail",
        ]
    );
}

#[tokio::test]
async fn sentence_stream_respects_context_gate() {
    let mut stream = SentenceTokenizer::new()
        .min_token_length(1)
        .min_context_length(64)
        .stream()
        .unwrap();

    // two complete sentences, but below the context gate: nothing moves
    stream.push_text("Short. Also short. And a").unwrap();
    stream.end_input().unwrap();

    let unit = stream.next().await.unwrap();
    assert_eq!(unit.token, "Short. Also short. And a");
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn word_stream_reproduces_input_words() {
    let text = "segment these words into small chunks for synthesis";
    let mut stream = WordTokenizer::new().min_token_length(10).stream().unwrap();

    stream.push_text(text).unwrap();
    stream.end_input().unwrap();

    let mut units: Vec<Unit> = Vec::new();
    while let Some(unit) = stream.next().await {
        units.push(unit);
    }
    let joined = units
        .iter()
        .map(|u| u.token.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(joined, text);
}

#[tokio::test]
async fn each_stream_call_is_independent() {
    let tokenizer = WordTokenizer::new().min_token_length(1);
    let mut a = tokenizer.stream().unwrap();
    let mut b = tokenizer.stream().unwrap();

    a.push_text("only in a").unwrap();
    a.end_input().unwrap();
    b.end_input().unwrap();

    assert!(a.next().await.is_some());
    assert!(b.next().await.is_none());
}

#[test]
fn builder_clamps_min_token_length() {
    // a zero threshold would be rejected by the stream constructor
    let stream = WordTokenizer::new().min_token_length(0).stream();
    assert!(stream.is_ok());
}
