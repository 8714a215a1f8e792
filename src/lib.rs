//! Bragi - incremental text segmentation for streaming speech pipelines
//!
//! This crate segments a live, appended text stream into bounded units
//! (sentences or words) without waiting for the full text, so downstream
//! consumers such as streaming speech synthesizers can start early. Callers
//! push text fragments as they arrive, optionally force a flush, and consume
//! completed units as an ordered, asynchronous sequence.
//!
//! # Sentence Example
//!
//! ```rust
//! use bragi::{SentenceTokenizer, Tokenizer};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> bragi::Result<()> {
//!     let mut stream = SentenceTokenizer::new()
//!         .min_token_length(8)
//!         .min_context_length(0)
//!         .stream()?;
//!
//!     // fragments arrive e.g. from an LLM token stream
//!     stream.push_text("The first sentence. And th")?;
//!     stream.push_text("e second one. A trailing bit")?;
//!     stream.end_input()?;
//!
//!     while let Some(unit) = stream.next().await {
//!         println!("[{}] {}", unit.segment_id, unit.token);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Custom Tokenization Function
//!
//! The buffering engine is independent of splitting policy: any
//! `Fn(&str) -> Vec<TokenSpan>` works. Functions that can compute offsets
//! should return [`TokenSpan::Positioned`] for exact buffer consumption.
//!
//! ```rust
//! use bragi::{SegmentStream, TokenSpan};
//!
//! # fn main() -> bragi::Result<()> {
//! let tokenize = |text: &str| {
//!     text.split_whitespace().map(TokenSpan::plain).collect::<Vec<_>>()
//! };
//! let stream = SegmentStream::new(Box::new(tokenize), 5, 0)?;
//! # let _ = stream;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod stream;
pub mod telemetry;
pub mod tokenizer;
pub mod types;

// Re-export main types at crate root
pub use error::{BragiError, Result};
pub use stream::{SegmentStream, TokenizeFn};
pub use tokenizer::{SentenceTokenizer, Tokenizer, WordTokenizer};
pub use types::{SegmentId, TokenSpan, Unit};
