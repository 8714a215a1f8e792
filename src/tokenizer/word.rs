//! Whitespace word splitter.

use crate::error::Result;
use crate::stream::SegmentStream;
use crate::tokenizer::Tokenizer;
use crate::types::TokenSpan;

/// Splits on whitespace and returns plain token strings.
///
/// Returns [`TokenSpan::Plain`], so streams built from it use the
/// approximate first-occurrence consumption path.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    min_token_length: usize,
    min_context_length: usize,
}

impl WordTokenizer {
    /// Defaults: emit chunks longer than 4 chars, no context gate.
    pub fn new() -> Self {
        Self {
            min_token_length: 4,
            min_context_length: 0,
        }
    }

    /// Char length emitted chunks must exceed (clamped to at least 1).
    pub fn min_token_length(mut self, len: usize) -> Self {
        self.min_token_length = len.max(1);
        self
    }

    /// Char length the input buffer must reach before tokenization runs.
    pub fn min_context_length(mut self, len: usize) -> Self {
        self.min_context_length = len;
        self
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<TokenSpan> {
        text.split_whitespace().map(TokenSpan::plain).collect()
    }

    fn stream(&self) -> Result<SegmentStream> {
        let this = self.clone();
        SegmentStream::new(
            Box::new(move |text| this.tokenize(text)),
            self.min_token_length,
            self.min_context_length,
        )
    }
}
