//! Schema model: services, methods and message types of one schema file.

mod parse;

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

pub use parse::parse_schema;

/// Index of a message within its [`Schema`].
///
/// Ids are only handed out by the schema that owns the message, so looking
/// one up in that schema always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MessageId(usize);

impl MessageId {
    /// Position of the message in declaration order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Root of the input tree: one schema source file.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Path of the schema source, relative to the source root (e.g., "billing.proto").
    pub file: String,
    /// Declared package (e.g., "billing"), empty when absent.
    pub package: String,
    /// Java package override.
    pub java_package: Option<String>,
    /// Java outer class name override.
    pub java_outer_classname: Option<String>,
    /// Generate each message as a top-level Java class instead of nesting it
    /// in the outer class.
    pub java_multiple_files: bool,
    /// Opt out of the legacy dialect's package suffix.
    pub use_deprecated_package: bool,
    /// Services in declaration order.
    pub services: Vec<Service>,
    messages: IndexMap<String, Message>,
}

impl Schema {
    /// Create an empty schema for the given source file.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            package: String::new(),
            java_package: None,
            java_outer_classname: None,
            java_multiple_files: false,
            use_deprecated_package: false,
            services: Vec::new(),
            messages: IndexMap::new(),
        }
    }

    /// Set the declared package.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Set the Java package override.
    pub fn with_java_package(mut self, java_package: impl Into<String>) -> Self {
        self.java_package = Some(java_package.into());
        self
    }

    /// Add a message and return its id.
    ///
    /// A message with the same name replaces the earlier declaration in
    /// place and keeps its id.
    pub fn add_message(&mut self, message: Message) -> MessageId {
        let (index, _) = self.messages.insert_full(message.name.clone(), message);
        MessageId(index)
    }

    /// Add a service.
    pub fn add_service(&mut self, service: Service) {
        self.services.push(service);
    }

    /// Get a message by id.
    pub fn message(&self, id: MessageId) -> &Message {
        &self.messages[id.0]
    }

    /// Look up a message by simple name or by `<package>.<Name>`.
    pub fn message_id(&self, name: &str) -> Option<MessageId> {
        let name = name.strip_prefix('.').unwrap_or(name);
        let simple = if self.package.is_empty() {
            name
        } else {
            name.strip_prefix(&self.package)
                .and_then(|rest| rest.strip_prefix('.'))
                .unwrap_or(name)
        };
        self.messages.get_index_of(simple).map(MessageId)
    }

    /// Iterate over messages in declaration order.
    pub fn messages(&self) -> impl Iterator<Item = (MessageId, &Message)> {
        self.messages
            .values()
            .enumerate()
            .map(|(index, message)| (MessageId(index), message))
    }

    /// Number of declared messages.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Total number of methods across all services.
    pub fn method_count(&self) -> usize {
        self.services.iter().map(|s| s.methods.len()).sum()
    }

    /// File name of the schema source without its directories
    /// (e.g., "billing.proto" for "acme/billing.proto").
    pub fn file_name(&self) -> &str {
        Path::new(&self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.file)
    }

    /// File name of the schema source without its extension.
    pub fn file_stem(&self) -> &str {
        Path::new(&self.file)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.file)
    }
}

/// An RPC service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub name: String,
    /// Methods in declaration order.
    pub methods: Vec<Method>,
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Add a method.
    pub fn method(mut self, name: impl Into<String>, input: MessageId, output: MessageId) -> Self {
        self.methods.push(Method {
            name: name.into(),
            input,
            output,
        });
        self
    }
}

/// A single RPC method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub input: MessageId,
    pub output: MessageId,
}

/// A message type. Fields are carried for completeness; generation only
/// uses the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// A message field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub type_name: String,
    pub number: u32,
}

impl Field {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, number: u32) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            number,
        }
    }
}
