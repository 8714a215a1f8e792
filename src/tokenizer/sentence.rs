//! Punctuation-based sentence splitter.

use crate::error::Result;
use crate::stream::SegmentStream;
use crate::tokenizer::Tokenizer;
use crate::types::TokenSpan;

/// Sentence-final punctuation recognized by default, Latin and CJK.
pub const DEFAULT_TERMINATORS: [char; 7] = ['.', '!', '?', '…', '。', '！', '？'];

/// Splits on sentence-final punctuation and returns position-annotated
/// tokens.
///
/// Boundaries are computed over the full buffered context, so streams built
/// from it use the exact offset-based consumption path. A run of terminators
/// (`"..."`, `"?!"`) ends the sentence after the last one, and a dot between
/// digits (`"25.000"`) is not terminal.
#[derive(Debug, Clone)]
pub struct SentenceTokenizer {
    min_token_length: usize,
    min_context_length: usize,
    terminators: Vec<char>,
}

impl SentenceTokenizer {
    /// Defaults: emit sentences longer than 16 chars, tokenize once 32
    /// chars are buffered, [`DEFAULT_TERMINATORS`].
    pub fn new() -> Self {
        Self {
            min_token_length: 16,
            min_context_length: 32,
            terminators: DEFAULT_TERMINATORS.to_vec(),
        }
    }

    /// Char length emitted sentences must exceed (clamped to at least 1).
    pub fn min_token_length(mut self, len: usize) -> Self {
        self.min_token_length = len.max(1);
        self
    }

    /// Char length the input buffer must reach before tokenization runs.
    pub fn min_context_length(mut self, len: usize) -> Self {
        self.min_context_length = len;
        self
    }

    /// Replace the sentence-final punctuation set, e.g. to add
    /// language-specific delimiters.
    pub fn terminators(mut self, terminators: impl Into<Vec<char>>) -> Self {
        self.terminators = terminators.into();
        self
    }

    fn is_terminal(&self, text: &str, pos: usize, c: char) -> bool {
        if !self.terminators.contains(&c) {
            return false;
        }
        c != '.' || !dot_in_number(text, pos)
    }
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for SentenceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<TokenSpan> {
        let mut spans = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if !self.is_terminal(text, i, c) {
                continue;
            }
            // extend over terminator runs ("...", "?!")
            if let Some(&(j, next)) = chars.peek()
                && self.is_terminal(text, j, next)
            {
                continue;
            }
            let end = i + c.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                spans.push(TokenSpan::positioned(sentence, start, end));
            }
            start = end;
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            spans.push(TokenSpan::positioned(tail, start, text.len()));
        }
        spans
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

/// A dot between two digits ("25.000", "3.14") does not end a sentence.
fn dot_in_number(text: &str, byte_pos: usize) -> bool {
    let bytes = text.as_bytes();
    byte_pos > 0
        && byte_pos + 1 < bytes.len()
        && bytes[byte_pos - 1].is_ascii_digit()
        && bytes[byte_pos + 1].is_ascii_digit()
}
