//! JavaScript client backend: AMD service stubs, message loaders, the
//! endpoint constants sample and a copy of the schema source.

mod amd;
mod generator;

pub mod files;

pub use amd::Define;
pub use generator::ClientBackend;
pub use rpcgen_codegen::language::Backend;
