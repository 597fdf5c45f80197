//! One artifact type per generated client file.

mod client_js;
mod constants_js;
mod loader_js;
mod schema_copy;

pub use client_js::ClientJs;
pub use constants_js::ConstantsJs;
pub use loader_js::LoaderJs;
pub use schema_copy::{DEFAULT_CHUNK_SIZE, SchemaCopy};
