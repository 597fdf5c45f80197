//! Generated artifacts and their shared bookkeeping.
//!
//! - [`GeneratedFile`] - One artifact: path, indentation and emission
//! - [`ImportSet`] - Sorted, de-duplicated import tracking

mod file;
mod imports;

pub use file::GeneratedFile;
pub use imports::{ImportSet, InsertOutcome};
