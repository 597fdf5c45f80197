//! Core utilities and types for the rpcgen service generator.
//!
//! This crate provides the output sinks generated artifacts are written
//! through and the string helpers shared by every backend.

mod file;
mod utils;

// Output sinks
pub use file::{DirSink, FirstWriteSink, MemorySink, OutputSink};
// String utilities
pub use utils::{lower_first, to_pascal_case};
