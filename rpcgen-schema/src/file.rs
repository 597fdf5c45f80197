use std::path::{Path, PathBuf};

use crate::{GeneratorOptions, Result, Schema, schema::parse_schema};

/// A schema descriptor file with its raw content, parsed schema and
/// `[generator]` options.
#[derive(Debug)]
pub struct SchemaFile {
    path: PathBuf,
    content: String,
    schema: Schema,
    options: GeneratorOptions,
}

impl SchemaFile {
    /// Open and parse a schema descriptor.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let (schema, options) = parse_schema(&content, &filename)?;

        Ok(Self {
            path,
            content,
            schema,
            options,
        })
    }

    /// Get the descriptor path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Get the options from the `[generator]` table.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::Error;

    #[test]
    fn test_open_missing_file() {
        let err = SchemaFile::open("definitely/not/here.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_open_reads_schema_and_options() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("schema.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "file = \"a.proto\"\n\n[generator]\njs_path = \"web\"").unwrap();
        drop(file);

        let schema_file = SchemaFile::open(&path).unwrap();
        assert_eq!(schema_file.schema().file, "a.proto");
        assert_eq!(schema_file.options().client_root(), "web/");
        assert!(schema_file.content().contains("[generator]"));
        assert_eq!(schema_file.path(), path.as_path());
    }
}
