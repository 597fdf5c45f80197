use std::path::PathBuf;

use eyre::Result;
use rpcgen_codegen::{generation::GeneratedFile, language::Backend, naming::NamingContext};
use rpcgen_core::OutputSink;

use crate::files::{HandlerJava, ServiceJava};

/// Emits one abstract handler class per method, services outer and methods
/// inner, in declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandlerBackend;

impl Backend for HandlerBackend {
    fn name(&self) -> &'static str {
        "handlers"
    }

    fn emit(&self, names: &NamingContext, sink: &mut dyn OutputSink) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(names.method_count());
        for service in names.services() {
            for method in &service.methods {
                written.push(HandlerJava::new(names, method).write(sink)?);
            }
        }
        Ok(written)
    }
}

/// Emits one service scaffold per service.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceBackend;

impl Backend for ServiceBackend {
    fn name(&self) -> &'static str {
        "services"
    }

    fn emit(&self, names: &NamingContext, sink: &mut dyn OutputSink) -> Result<Vec<PathBuf>> {
        names
            .services()
            .iter()
            .map(|service| ServiceJava::new(names, service).write(sink))
            .collect()
    }
}
