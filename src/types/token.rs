//! Tokenization result shapes.

use serde::{Deserialize, Serialize};

/// One token produced by a tokenization function.
///
/// Tokenizers come in two shapes: plain splitters that only return token
/// text, and boundary detectors that also know where in the input each token
/// sits. The segment buffer consumes input differently for each (see
/// [`SegmentBuffer`](crate::stream::SegmentBuffer)), so the shape is carried
/// explicitly instead of being inspected at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TokenSpan {
    /// Token text without position information.
    ///
    /// Consumed by searching for the first occurrence of the text in the
    /// input buffer. When the same text recurs earlier in the buffer than
    /// the token's actual position, that search can under- or over-consume;
    /// tokenizers that can compute offsets should return
    /// [`TokenSpan::Positioned`] instead.
    Plain(String),

    /// Token text with byte offsets into the tokenized input.
    ///
    /// Offsets must lie on `char` boundaries; `end` is exclusive.
    Positioned {
        text: String,
        start: usize,
        end: usize,
    },
}

impl TokenSpan {
    /// Create a plain token.
    pub fn plain(text: impl Into<String>) -> Self {
        TokenSpan::Plain(text.into())
    }

    /// Create a position-annotated token.
    pub fn positioned(text: impl Into<String>, start: usize, end: usize) -> Self {
        TokenSpan::Positioned {
            text: text.into(),
            start,
            end,
        }
    }

    /// The token's text, regardless of shape.
    pub fn text(&self) -> &str {
        match self {
            TokenSpan::Plain(text) => text,
            TokenSpan::Positioned { text, .. } => text,
        }
    }
}
