//! Backend abstractions.
//!
//! - [`Backend`] - One fixed generation pipeline for a target language
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`PreviewFile`] - Generated file preview

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{Backend, PreviewFile};
