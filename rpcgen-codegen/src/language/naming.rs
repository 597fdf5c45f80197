//! Naming conventions for the generated languages.

/// Language-specific naming rules.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Language name used in diagnostics.
    pub language: &'static str,
    /// Words that cannot be used as identifiers.
    pub reserved_words: &'static [&'static str],
    /// Modules every generated client module depends on.
    pub fixed_dependencies: &'static [&'static str],
}

impl NamingConvention {
    /// JavaScript as emitted in the AMD client modules.
    pub const JAVASCRIPT: Self = Self {
        language: "JavaScript",
        reserved_words: JS_RESERVED_WORDS,
        fixed_dependencies: &["protobuf", "jquery", "constants"],
    };

    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Check if a name is one of the fixed module dependencies.
    pub fn is_fixed_dependency(&self, name: &str) -> bool {
        self.fixed_dependencies.contains(&name)
    }
}

const JS_RESERVED_WORDS: &[&str] = &[
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];
