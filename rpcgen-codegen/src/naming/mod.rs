//! Name derivation and the per-run naming context.
//!
//! - [`resolver`] - Pure functions from schema entities to target identifiers
//! - [`NamingContext`] - Every derived name and path, computed once per run

mod context;
pub mod resolver;

pub use context::{ClientLayout, JavaLayout, MessageNames, MethodNames, NamingContext, ServiceNames};
pub use resolver::{Target, lower_first};
