//! Tokenizer strategies.
//!
//! A tokenizer pairs a splitting function with the thresholds a buffered
//! stream should run it under. Concrete splitters are swappable policy;
//! the buffering engine itself lives in [`crate::stream`].

mod sentence;
mod word;

pub use sentence::SentenceTokenizer;
pub use word::WordTokenizer;

use crate::error::Result;
use crate::stream::SegmentStream;
use crate::types::TokenSpan;

/// Strategy contract for pluggable splitters.
pub trait Tokenizer: Send + Sync {
    /// Split `text` in one shot, in input order.
    fn tokenize(&self, text: &str) -> Vec<TokenSpan>;

    /// A fresh buffered stream bound to this tokenizer's splitting function
    /// and thresholds.
    fn stream(&self) -> Result<SegmentStream>;
}
