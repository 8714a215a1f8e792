//! Segment buffer: the buffering/re-segmentation engine.
//!
//! Accumulates raw incoming text, re-runs the caller-supplied tokenization
//! function on the growing buffer, emits tokens once a strictly later token
//! proves their boundary is final, and carries the remainder forward.

use tracing::{debug, trace};

use crate::error::{BragiError, Result};
use crate::stream::channel::UnitSender;
use crate::telemetry;
use crate::types::{SegmentId, TokenSpan, Unit};

/// Pure tokenization function supplied by the caller.
///
/// Must be stateless: it is re-invoked on the full remaining input on every
/// drain-loop iteration. May return either plain token strings or
/// position-annotated tokens (see [`TokenSpan`]).
pub type TokenizeFn = Box<dyn Fn(&str) -> Vec<TokenSpan> + Send>;

/// Owned, exclusively-mutable buffer state behind a
/// [`SegmentStream`](crate::stream::SegmentStream).
///
/// Invariant: `output` (if non-empty) concatenated with the remaining
/// `input` reconstructs all text pushed since the last emit or consume
/// point. Nothing is dropped except leading whitespace trimmed after a
/// token boundary on the plain-token consumption path.
pub struct SegmentBuffer {
    /// Raw text not yet fully consumed by tokenization.
    input: String,
    /// Partially assembled unit text, not yet past the emit threshold.
    output: String,
    tokenize: TokenizeFn,
    /// Assembled text must exceed this length (chars) before the drain loop
    /// enqueues it. Flush-emitted units may be shorter.
    min_token_length: usize,
    /// Minimum accumulated input length (chars) before tokenization runs.
    min_context_length: usize,
    segment_id: SegmentId,
}

impl std::fmt::Debug for SegmentBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentBuffer")
            .field("input", &self.input)
            .field("output", &self.output)
            .field("min_token_length", &self.min_token_length)
            .field("min_context_length", &self.min_context_length)
            .field("segment_id", &self.segment_id)
            .finish_non_exhaustive()
    }
}

impl SegmentBuffer {
    /// Create buffer state for a new stream.
    pub fn new(
        tokenize: TokenizeFn,
        min_token_length: usize,
        min_context_length: usize,
    ) -> Result<Self> {
        if min_token_length == 0 {
            return Err(BragiError::Configuration(
                "min_token_length must be at least 1".into(),
            ));
        }
        Ok(Self {
            input: String::new(),
            output: String::new(),
            tokenize,
            min_token_length,
            min_context_length,
            segment_id: SegmentId::FIRST,
        })
    }

    /// Segment id that the next emitted unit will carry.
    pub fn segment_id(&self) -> SegmentId {
        self.segment_id
    }

    /// Append a fragment and drain all stabilized tokens into `sink`.
    ///
    /// A token is stabilized once the tokenizer finds a strictly later one:
    /// re-tokenizing the full remaining buffer on every iteration lets
    /// boundary decisions use all right-context currently available, while
    /// the last token is always held back since more input may extend it.
    pub fn push_text(&mut self, fragment: &str, sink: &UnitSender) {
        self.input.push_str(fragment);
        trace!(
            fragment_len = fragment.len(),
            buffered = self.input.len(),
            "fragment buffered"
        );

        if char_len(&self.input) < self.min_context_length {
            return;
        }

        loop {
            metrics::counter!(telemetry::TOKENIZE_CALLS_TOTAL).increment(1);
            let tokens = (self.tokenize)(&self.input);
            if tokens.len() <= 1 {
                // The last token may still grow with more input; without a
                // successor there is no proof its boundary is final.
                break;
            }

            let candidate = &tokens[0];
            if !self.output.is_empty() {
                self.output.push(' ');
            }
            self.output.push_str(candidate.text());

            if char_len(&self.output) > self.min_token_length {
                self.emit("drain", sink);
            }

            let before = self.input.len();
            self.consume(candidate);
            if self.input.len() >= before {
                // Tokenizer failed to advance the buffer (plain-token text
                // not found, or a zero-width span). Stop rather than loop.
                break;
            }
        }
    }

    /// Force-drain everything buffered and advance the segment identity.
    ///
    /// The remaining input is tokenized one final time with no
    /// boundary-safety constraint and joined into a single unit, which may
    /// be shorter than `min_token_length`. Both buffers are cleared and the
    /// segment id advances even when nothing was pending.
    pub fn flush(&mut self, sink: &UnitSender) {
        metrics::counter!(telemetry::FLUSHES_TOTAL).increment(1);

        if !self.input.is_empty() {
            metrics::counter!(telemetry::TOKENIZE_CALLS_TOTAL).increment(1);
            for token in (self.tokenize)(&self.input) {
                let text = token.text();
                if text.is_empty() {
                    continue;
                }
                if !self.output.is_empty() {
                    self.output.push(' ');
                }
                self.output.push_str(text);
            }
        }
        if !self.output.is_empty() {
            self.emit("flush", sink);
        }

        self.input.clear();
        self.output.clear();
        self.segment_id = self.segment_id.next();
        debug!(next_segment = %self.segment_id, "flushed, segment advanced");
    }

    /// Hand the assembled output to the delivery channel.
    fn emit(&mut self, path: &'static str, sink: &UnitSender) {
        let len = char_len(&self.output);
        let token = std::mem::take(&mut self.output);
        trace!(segment_id = %self.segment_id, len, path, "unit emitted");
        metrics::counter!(telemetry::UNITS_EMITTED_TOTAL, "path" => path).increment(1);
        metrics::histogram!(telemetry::UNIT_LENGTH_CHARS, "path" => path).record(len as f64);
        sink.send(Unit::new(self.segment_id, token));
    }

    /// Advance the input buffer past a consumed candidate token.
    ///
    /// Positioned tokens slice at the exact end offset. Plain tokens fall
    /// back to a first-occurrence search followed by leading-whitespace
    /// trimming, which can mis-slice when the token's text recurs earlier
    /// in the buffer than its actual position (see [`TokenSpan::Plain`]).
    fn consume(&mut self, token: &TokenSpan) {
        match token {
            TokenSpan::Positioned { end, .. } => {
                let rest = self.input.split_off(*end);
                self.input = rest;
            }
            TokenSpan::Plain(text) => {
                if let Some(pos) = self.input.find(text.as_str()) {
                    self.input = self.input[pos + text.len()..].trim_start().to_string();
                }
            }
        }
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
