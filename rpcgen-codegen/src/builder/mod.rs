//! Code generation building blocks.
//!
//! - [`Printer`] - Indentation-aware `$var$` template printer
//! - [`Indent`] - Indentation configuration

mod indent;
mod printer;

pub use indent::Indent;
pub use printer::{DELIMITER, Printer, Vars};
