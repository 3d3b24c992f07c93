//! Observability boundary.
//!
//! Resolution never logs directly. Diagnostics are emitted as
//! [`trace::ResolutionTraceEvent`] values to a caller-injected sink.

pub mod trace;
