//! Public types for the Bragi API.

mod token;
mod unit;

pub use token::TokenSpan;
pub use unit::{SegmentId, Unit};
