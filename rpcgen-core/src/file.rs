use std::{
    collections::HashSet,
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr, bail};

/// Destination for generated artifacts.
///
/// A sink turns a path relative to its root into a writable byte stream.
/// The generator opens every path at most once per run and never reads back
/// or deletes anything it opened.
pub trait OutputSink {
    /// Open `path` for writing, replacing any previous content.
    fn open(&mut self, path: &Path) -> Result<Box<dyn Write + '_>>;
}

/// Sink that writes artifacts below a directory on disk.
///
/// Parent directories are created on demand.
#[derive(Debug, Clone)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    /// Create a sink rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for DirSink {
    fn open(&mut self, path: &Path) -> Result<Box<dyn Write + '_>> {
        let full = self.root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
        }
        let file = fs::File::create(&full)
            .wrap_err_with(|| format!("failed to open '{}' for writing", full.display()))?;
        tracing::trace!(path = %full.display(), "opened output file");
        Ok(Box::new(BufWriter::new(file)))
    }
}

/// Sink that keeps artifacts in memory, in the order they were opened.
///
/// Used for previews and tests. Opening the same path twice is an error.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Vec<(PathBuf, Vec<u8>)>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded files in open order.
    pub fn files(&self) -> &[(PathBuf, Vec<u8>)] {
        &self.files
    }

    /// Paths of all recorded files in open order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|(path, _)| path.as_path())
    }

    /// Get the content written to `path`.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&[u8]> {
        let path = path.as_ref();
        self.files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, content)| content.as_slice())
    }

    /// Get the content written to `path` as UTF-8 text.
    pub fn get_str(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.get(path).and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// Number of recorded files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Consume the sink and return the recorded files.
    pub fn into_files(self) -> Vec<(PathBuf, Vec<u8>)> {
        self.files
    }
}

impl OutputSink for MemorySink {
    fn open(&mut self, path: &Path) -> Result<Box<dyn Write + '_>> {
        if self.files.iter().any(|(p, _)| p == path) {
            bail!("'{}' was already opened in this run", path.display());
        }
        let index = self.files.len();
        self.files.push((path.to_path_buf(), Vec::new()));
        Ok(Box::new(&mut self.files[index].1))
    }
}

/// Sink adapter that lets every path through once.
///
/// Later opens of an already opened path are swallowed: the writer discards
/// its bytes and the path is recorded in [`FirstWriteSink::skipped`]. This
/// keeps derived-name collisions from overwriting or reopening an artifact.
pub struct FirstWriteSink<'a> {
    inner: &'a mut dyn OutputSink,
    opened: HashSet<PathBuf>,
    skipped: Vec<PathBuf>,
}

impl<'a> FirstWriteSink<'a> {
    pub fn new(inner: &'a mut dyn OutputSink) -> Self {
        Self {
            inner,
            opened: HashSet::new(),
            skipped: Vec::new(),
        }
    }

    /// Paths whose repeated opens were discarded, in order.
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    pub fn into_skipped(self) -> Vec<PathBuf> {
        self.skipped
    }
}

impl OutputSink for FirstWriteSink<'_> {
    fn open(&mut self, path: &Path) -> Result<Box<dyn Write + '_>> {
        if !self.opened.insert(path.to_path_buf()) {
            tracing::warn!(path = %path.display(), "skipping artifact with an already generated path");
            self.skipped.push(path.to_path_buf());
            return Ok(Box::new(io::sink()));
        }
        self.inner.open(path)
    }
}
