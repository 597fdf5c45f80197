//! Schema model and descriptor loading for the rpcgen service generator.
//!
//! The generator consumes a read-only [`Schema`]: services with their
//! methods, and the message types those methods exchange. Hosts either
//! build one in code or load a TOML descriptor with [`SchemaFile`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod options;
mod schema;

pub use error::{Error, Result, SourceContext};
pub use file::SchemaFile;
pub use options::GeneratorOptions;
pub use schema::{Field, Message, MessageId, Method, Schema, Service, parse_schema};
