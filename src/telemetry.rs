//! Telemetry metric name constants.
//!
//! Centralised metric names for predictor client operations. Consumers
//! install their own `metrics` recorder (e.g. prometheus, statsd); without
//! a recorder installed, all metric calls are no-ops.
//!
//! # Common labels
//!
//! - `operation` — forwarding call invoked (e.g. "ready", "predict")
//! - `status` — outcome: "ok" or "error"

/// Total RPCs issued through the client.
///
/// Labels: `operation`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "predictor_client_requests_total";

/// RPC duration in seconds, measured around the full round trip.
///
/// Labels: `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "predictor_client_request_duration_seconds";
