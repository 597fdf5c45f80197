//! Java backends: one service scaffold per service and one abstract
//! handler class per method.

mod generator;

pub mod files;

pub use generator::{HandlerBackend, ServiceBackend};
pub use rpcgen_codegen::language::Backend;

/// Value of the `@Generated` annotation on every emitted class.
pub const GENERATED_BY: &str = "by rpcgen";
