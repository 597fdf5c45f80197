//! Core operations.
//!
//! The logic behind each command, kept apart from argument parsing and
//! rendering.

pub mod check;
pub mod generate;
pub mod info;

pub use check::check;
pub use generate::generate;
pub use info::info;
