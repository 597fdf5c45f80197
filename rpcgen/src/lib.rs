//! Descriptor-driven RPC source generator.
//!
//! One [`Engine::generate`] call turns a [`Schema`](rpcgen_schema::Schema)
//! into coupled Java and JavaScript artifacts: abstract handler classes,
//! service scaffolds, client stubs, message loaders, an endpoint constants
//! sample and a copy of the schema source.
//!
//! ```no_run
//! use rpcgen::generate;
//! use rpcgen_core::DirSink;
//! use rpcgen_schema::SchemaFile;
//!
//! let file = SchemaFile::open("rpcgen.toml").unwrap();
//! let mut sink = DirSink::new("out");
//! let report = generate(file.schema(), file.options(), &mut sink).unwrap();
//! println!("{} files", report.len());
//! ```

mod engine;

pub use engine::{Engine, GenerateReport, generate};
pub use rpcgen_codegen::language::PreviewFile;
