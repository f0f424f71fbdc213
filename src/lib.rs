#![deny(missing_docs)]

//! Core library for the Gradekeeper interactive grade book.

/// Structured logging and tracing setup.
pub mod logging;
/// Session activity counters.
pub mod metrics;
/// In-memory student registry and its operations.
pub mod registry;
/// Report construction and top-performer selection.
pub mod report;
/// Interactive menu session over a console transport.
pub mod session;
