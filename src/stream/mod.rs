//! Buffered segment stream: producer surface plus ordered async consumption.

mod buffer;
mod channel;

pub use buffer::{SegmentBuffer, TokenizeFn};
pub use channel::{UnitReceiver, UnitSender, unit_channel};

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use tracing::debug;

use crate::error::{BragiError, Result};
use crate::types::{SegmentId, Unit};

/// A live, appended text stream segmented into bounded units.
///
/// One logical producer pushes fragments through [`push_text`], forces
/// segment boundaries with [`flush`], and ends the stream with
/// [`end_input`]; one logical consumer awaits [`next`] (or iterates via the
/// [`Stream`] impl) and receives stabilized [`Unit`]s in push order.
/// Producer calls never suspend; `next` is the only suspension point.
///
/// Operations on one instance are not designed to be called from multiple
/// threads without external synchronization.
///
/// ```
/// use bragi::{SegmentStream, TokenSpan};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> bragi::Result<()> {
/// let tokenize = |text: &str| {
///     text.split_whitespace().map(TokenSpan::plain).collect::<Vec<_>>()
/// };
/// let mut stream = SegmentStream::new(Box::new(tokenize), 5, 0)?;
///
/// stream.push_text("the quick brown fox")?;
/// stream.end_input()?;
///
/// while let Some(unit) = stream.next().await {
///     println!("[{}] {}", unit.segment_id, unit.token);
/// }
/// # Ok(())
/// # }
/// ```
///
/// [`push_text`]: SegmentStream::push_text
/// [`flush`]: SegmentStream::flush
/// [`end_input`]: SegmentStream::end_input
/// [`next`]: SegmentStream::next
pub struct SegmentStream {
    buffer: SegmentBuffer,
    /// `None` once the stream is closed; dropping the sender is what lets
    /// the consumer drain and then observe end-of-stream.
    sender: Option<UnitSender>,
    receiver: UnitReceiver,
}

impl SegmentStream {
    /// Create a stream around a tokenization function and its thresholds.
    ///
    /// `min_token_length` is the char length assembled text must exceed
    /// before the drain loop emits it (at least 1); `min_context_length`
    /// is the char length the input buffer must reach before tokenization
    /// is attempted at all.
    pub fn new(
        tokenize: TokenizeFn,
        min_token_length: usize,
        min_context_length: usize,
    ) -> Result<Self> {
        let buffer = SegmentBuffer::new(tokenize, min_token_length, min_context_length)?;
        let (sender, receiver) = unit_channel();
        Ok(Self {
            buffer,
            sender: Some(sender),
            receiver,
        })
    }

    /// Append a text fragment, emitting any tokens it stabilizes.
    ///
    /// Synchronous and non-suspending; completed units are queued for the
    /// consumer without waiting for it.
    pub fn push_text(&mut self, text: &str) -> Result<()> {
        let sender = self.sender.as_ref().ok_or(BragiError::StreamClosed)?;
        self.buffer.push_text(text, sender);
        Ok(())
    }

    /// Force all buffered text out as a unit and start a new segment.
    ///
    /// The emitted unit may be shorter than `min_token_length`.
    pub fn flush(&mut self) -> Result<()> {
        let sender = self.sender.as_ref().ok_or(BragiError::StreamClosed)?;
        self.buffer.flush(sender);
        Ok(())
    }

    /// Flush remaining text, then close the stream.
    ///
    /// Queued units stay consumable; once drained, [`next`](Self::next)
    /// reports end-of-stream.
    pub fn end_input(&mut self) -> Result<()> {
        self.flush()?;
        self.close();
        Ok(())
    }

    /// Close the stream. Idempotent.
    ///
    /// Further producer calls fail with
    /// [`StreamClosed`](BragiError::StreamClosed); buffered units remain
    /// consumable until drained. Text still sitting in the buffers is
    /// discarded; call [`end_input`](Self::end_input) to flush it first.
    pub fn close(&mut self) {
        if self.sender.take().is_some() {
            debug!(segment_id = %self.buffer.segment_id(), "stream closed");
        }
    }

    /// Whether the stream has transitioned to closed.
    pub fn closed(&self) -> bool {
        self.sender.is_none()
    }

    /// Segment id the next emitted unit will carry. Diagnostic.
    pub fn segment_id(&self) -> SegmentId {
        self.buffer.segment_id()
    }

    /// Receive the next unit in push order.
    ///
    /// Suspends until a unit is available; returns `None` once the stream
    /// is closed and all queued units were consumed. A stream that is never
    /// closed and never produces leaves the caller suspended indefinitely —
    /// bounded waits are the caller's responsibility.
    pub async fn next(&mut self) -> Option<Unit> {
        self.receiver.recv().await
    }
}

impl Stream for SegmentStream {
    type Item = Unit;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Unit>> {
        self.get_mut().receiver.poll_recv(cx)
    }
}

impl std::fmt::Debug for SegmentStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentStream")
            .field("segment_id", &self.buffer.segment_id())
            .field("closed", &self.closed())
            .finish_non_exhaustive()
    }
}
