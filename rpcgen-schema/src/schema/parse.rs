//! Schema descriptor parsing from TOML files and strings.

use std::{path::Path, str::FromStr};

use miette::SourceSpan;
use serde::Deserialize;

use super::{Field, Message, Method, Schema, Service};
use crate::{Error, GeneratorOptions, Result, error::SourceContext};

#[derive(Debug, Deserialize)]
struct RawSchema {
    file: String,
    #[serde(default)]
    package: String,
    java_package: Option<String>,
    java_outer_classname: Option<String>,
    #[serde(default)]
    java_multiple_files: bool,
    #[serde(default)]
    use_deprecated_package: bool,
    #[serde(default)]
    generator: GeneratorOptions,
    #[serde(default, rename = "message")]
    messages: Vec<RawMessage>,
    #[serde(default, rename = "service")]
    services: Vec<RawService>,
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    name: String,
    #[serde(default, rename = "field")]
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    number: u32,
}

#[derive(Debug, Deserialize)]
struct RawService {
    name: String,
    #[serde(default, rename = "method")]
    methods: Vec<RawMethod>,
}

#[derive(Debug, Deserialize)]
struct RawMethod {
    name: String,
    input: String,
    output: String,
}

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema(s, "schema.toml").map(|(schema, _)| schema)
    }
}

impl Schema {
    /// Parse a schema descriptor from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_schema(&content, &path.display().to_string()).map(|(schema, _)| schema)
    }
}

/// Parse a descriptor into its schema and its `[generator]` options.
///
/// Method type references are resolved against the declared messages;
/// everything else is taken as written.
pub fn parse_schema(content: &str, filename: &str) -> Result<(Schema, GeneratorOptions)> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawSchema = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    let mut schema = Schema::new(raw.file);
    schema.package = raw.package;
    schema.java_package = raw.java_package;
    schema.java_outer_classname = raw.java_outer_classname;
    schema.java_multiple_files = raw.java_multiple_files;
    schema.use_deprecated_package = raw.use_deprecated_package;

    for message in raw.messages {
        if schema.message_id(&message.name).is_some() {
            let mut spans = name_spans(content, &message.name);
            let first = spans.next();
            let second = spans.next();
            return Err(source_ctx.duplicate_message_error(&message.name, first, second));
        }
        let fields = message
            .fields
            .into_iter()
            .map(|f| Field::new(f.name, f.type_name, f.number))
            .collect();
        schema.add_message(Message {
            name: message.name,
            fields,
        });
    }

    for service in raw.services {
        let mut methods = Vec::with_capacity(service.methods.len());
        for method in service.methods {
            let location = format!("method '{}.{}'", service.name, method.name);
            let resolve = |key: &str, type_name: &str| {
                schema.message_id(type_name).ok_or_else(|| {
                    source_ctx.unknown_message_error(
                        type_name,
                        location.clone(),
                        value_span(content, key, type_name),
                    )
                })
            };
            let input = resolve("input", &method.input)?;
            let output = resolve("output", &method.output)?;
            methods.push(Method {
                name: method.name,
                input,
                output,
            });
        }
        schema.add_service(Service {
            name: service.name,
            methods,
        });
    }

    Ok((schema, raw.generator))
}

/// Find the span of a string value assigned to `key` (e.g., `input = "Order"`).
fn value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        for sep in [" = ", "="] {
            let pattern = format!("{key}{sep}{quote}{value}{quote}");
            if let Some(pos) = src.find(&pattern) {
                let start = pos + key.len() + sep.len() + 1;
                return Some(SourceSpan::from((start, value.len())));
            }
        }
    }
    None
}

/// Spans of every `name = "<name>"` assignment, in source order.
fn name_spans<'a>(src: &'a str, name: &'a str) -> impl Iterator<Item = SourceSpan> + 'a {
    let pattern = format!("name = \"{name}\"");
    let offset = "name = \"".len();
    src.match_indices(&pattern)
        .map(move |(pos, _)| SourceSpan::from((pos + offset, name.len())))
        .collect::<Vec<_>>()
        .into_iter()
}
