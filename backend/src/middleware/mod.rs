//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns. Currently request
//! tracing and access logging.

pub mod trace;

pub use trace::Trace;
