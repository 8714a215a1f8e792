//! Emitted unit types.

use serde::{Deserialize, Serialize};

/// Identity of one uninterrupted span of input.
///
/// All units emitted between two consecutive flushes share one id; a flush
/// (or `end_input`, which flushes) moves the stream to the next id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub u64);

impl SegmentId {
    /// Id assigned to text pushed before the first flush.
    pub const FIRST: SegmentId = SegmentId(0);

    /// The id following this one.
    pub fn next(self) -> Self {
        SegmentId(self.0 + 1)
    }
}

impl std::fmt::Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One stabilized text chunk ready for consumption.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Unit {
    /// Segment this unit belongs to.
    pub segment_id: SegmentId,
    /// Whitespace-joined, stabilized text.
    pub token: String,
}

impl Unit {
    /// Create a new unit.
    pub fn new(segment_id: SegmentId, token: impl Into<String>) -> Self {
        Self {
            segment_id,
            token: token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_id_next() {
        assert_eq!(SegmentId::FIRST.next(), SegmentId(1));
        assert_eq!(SegmentId(7).next(), SegmentId(8));
    }

    #[test]
    fn unit_new() {
        let unit = Unit::new(SegmentId(3), "hello world");
        assert_eq!(unit.segment_id, SegmentId(3));
        assert_eq!(unit.token, "hello world");
    }

    #[test]
    fn unit_serde_round_trip() {
        let unit = Unit::new(SegmentId(1), "brown fox");
        let json = serde_json::to_string(&unit).unwrap();
        let back: Unit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, unit);
    }
}
