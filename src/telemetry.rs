//! Telemetry metric name constants.
//!
//! Centralised metric names for bragi operations. Consumers install their
//! own `metrics` recorder (e.g. prometheus, statsd); without a recorder
//! installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `bragi_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_chars`).
//!
//! # Common labels
//!
//! - `path` — how the unit left the buffer: "drain" (threshold reached in
//!   the re-tokenization loop) or "flush" (forced out by `flush`/`end_input`)

/// Total units handed to the delivery channel.
///
/// Labels: `path` ("drain" | "flush").
pub const UNITS_EMITTED_TOTAL: &str = "bragi_units_emitted_total";

/// Emitted unit length in characters.
///
/// Labels: `path`.
pub const UNIT_LENGTH_CHARS: &str = "bragi_unit_length_chars";

/// Total flushes (explicit `flush` calls plus the final flush in
/// `end_input`).
pub const FLUSHES_TOTAL: &str = "bragi_flushes_total";

/// Total invocations of the caller-supplied tokenization function.
pub const TOKENIZE_CALLS_TOTAL: &str = "bragi_tokenize_calls_total";
