//! Delivery channel between the segment buffer and the consumer.
//!
//! A single-producer/single-consumer ordered queue built on
//! `tokio::sync::mpsc`. The producer side is synchronous and never suspends
//! (`push_text` must not block on the consumer), so the channel is unbounded.
//! Closing drops the sender; the receiver keeps draining already-buffered
//! units and then observes end-of-stream.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::warn;

use crate::types::Unit;

/// Create a connected sender/receiver pair.
pub fn unit_channel() -> (UnitSender, UnitReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        UnitSender { tx },
        UnitReceiver {
            rx: UnboundedReceiverStream::new(rx),
        },
    )
}

/// Writer half: enqueues units in FIFO order.
#[derive(Debug)]
pub struct UnitSender {
    tx: mpsc::UnboundedSender<Unit>,
}

impl UnitSender {
    /// Enqueue a unit. Does not suspend.
    ///
    /// A send can only fail when the receiver half was dropped; the unit is
    /// discarded in that case since nobody can consume it.
    pub fn send(&self, unit: Unit) {
        if let Err(e) = self.tx.send(unit) {
            warn!(segment_id = %e.0.segment_id, "unit dropped, receiver gone");
        }
    }
}

/// Reader half: yields units in enqueue order, then `None` once the sender
/// is dropped and the queue is drained.
#[derive(Debug)]
pub struct UnitReceiver {
    rx: UnboundedReceiverStream<Unit>,
}

impl UnitReceiver {
    /// Receive the next unit, suspending until one is available.
    ///
    /// Returns `None` after the sender was dropped and all buffered units
    /// were consumed (terminal).
    pub async fn recv(&mut self) -> Option<Unit> {
        self.rx.next().await
    }

    /// Poll form of [`recv`](Self::recv), used by the `Stream` impl.
    pub fn poll_recv(&mut self, cx: &mut Context<'_>) -> Poll<Option<Unit>> {
        Pin::new(&mut self.rx).poll_next(cx)
    }
}
