//! Report data structures for commands.
//!
//! Operations build reports; commands render them to an [`Output`].

mod check;
mod generate;
mod info;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateSummary, GenerationResult};
pub use info::InfoReport;
pub use output::{Report, TerminalOutput};
