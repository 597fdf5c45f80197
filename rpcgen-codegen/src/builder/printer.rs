//! Indentation-aware template printer.

use std::io::{self, Write};

use super::Indent;

/// Delimiter around template variables (`$name$`). `$$` prints a literal `$`.
pub const DELIMITER: char = '$';

/// Template variables: `(name, value)` pairs.
pub type Vars<'a> = [(&'a str, &'a str)];

/// Text emitter over a single output stream.
///
/// Every line is prefixed with the current indentation as soon as its first
/// non-newline byte is written; blank lines carry no prefix. Write errors are
/// latched and reported by [`Printer::finish`], so emission code can chain
/// calls without checking each one.
///
/// # Example
///
/// ```
/// use rpcgen_codegen::builder::{Indent, Printer};
///
/// let mut out = Vec::new();
/// let mut p = Printer::new(&mut out, Indent::JAVA);
/// p.print("class $name$ {\n", &[("name", "Foo")])
///     .indent()
///     .line("int x;")
///     .outdent()
///     .line("}");
/// p.finish().unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "class Foo {\n  int x;\n}\n");
/// ```
pub struct Printer<'w> {
    out: &'w mut dyn Write,
    indent: Indent,
    depth: usize,
    at_line_start: bool,
    written: u64,
    error: Option<io::Error>,
}

impl<'w> Printer<'w> {
    /// Create a printer writing to `out`.
    pub fn new(out: &'w mut dyn Write, indent: Indent) -> Self {
        Self {
            out,
            indent,
            depth: 0,
            at_line_start: true,
            written: 0,
            error: None,
        }
    }

    /// Print `template`, replacing every `$name$` with its value from `vars`.
    ///
    /// Substituted values are indented like literal template text.
    ///
    /// # Panics
    ///
    /// Panics if the template references a variable missing from `vars` or
    /// contains an unclosed delimiter. Templates are static, so either is a
    /// bug in the emitting code.
    pub fn print(&mut self, template: &str, vars: &Vars<'_>) -> &mut Self {
        let mut rest = template;
        while let Some(start) = rest.find(DELIMITER) {
            self.write_text(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find(DELIMITER) else {
                panic!("unclosed variable delimiter in template {template:?}");
            };
            let name = &after[..end];
            if name.is_empty() {
                self.write_text("$");
            } else {
                let value = lookup(vars, name).unwrap_or_else(|| {
                    panic!("undefined variable `{name}` in template {template:?}")
                });
                self.write_text(value);
            }
            rest = &after[end + 1..];
        }
        self.write_text(rest);
        self
    }

    /// Print text as-is (no variable substitution), honoring indentation.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.write_text(text);
        self
    }

    /// Print one line of text followed by a newline.
    pub fn line(&mut self, line: &str) -> &mut Self {
        self.write_text(line);
        self.write_text("\n");
        self
    }

    /// Print an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.write_text("\n");
        self
    }

    /// Print `open`, then the body one level deeper, then `close`.
    ///
    /// Both `open` and `close` are templates over `vars`. The body always
    /// returns to the starting depth.
    pub fn block<F>(&mut self, open: &str, close: &str, vars: &Vars<'_>, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.print(open, vars).indent();
        body(self);
        self.outdent().print(close, vars)
    }

    /// Increase indentation by one level.
    pub fn indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Decrease indentation by one level.
    ///
    /// # Panics
    ///
    /// Panics when called at depth zero.
    pub fn outdent(&mut self) -> &mut Self {
        assert!(self.depth > 0, "outdent() without matching indent()");
        self.depth -= 1;
        self
    }

    /// Write bytes verbatim: no substitution, no indentation.
    pub fn print_raw(&mut self, bytes: &[u8]) -> &mut Self {
        if let Some(last) = bytes.last() {
            self.write_bytes(bytes);
            self.at_line_start = *last == b'\n';
        }
        self
    }

    /// Current indentation depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Check whether a write has failed.
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }

    /// Finish printing and return the number of bytes written, or the first
    /// write error.
    pub fn finish(self) -> io::Result<u64> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.written),
        }
    }

    fn write_text(&mut self, text: &str) {
        for piece in text.split_inclusive('\n') {
            if self.at_line_start && piece != "\n" {
                for _ in 0..self.depth {
                    self.write_bytes(self.indent.as_str().as_bytes());
                }
            }
            self.write_bytes(piece.as_bytes());
            self.at_line_start = piece.ends_with('\n');
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        match self.out.write_all(bytes) {
            Ok(()) => self.written += bytes.len() as u64,
            Err(err) => self.error = Some(err),
        }
    }
}

fn lookup<'a>(vars: &Vars<'a>, name: &str) -> Option<&'a str> {
    vars.iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}
