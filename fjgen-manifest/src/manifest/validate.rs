//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use fjgen_core::is_java_identifier;
use miette::{NamedSource, SourceSpan};

use crate::{Error, Problem, Result};

/// Parsing and validation context that carries source information.
///
/// Carries the source, the filename and the current path through the
/// manifest (e.g. `["Car", "make"]`) so nested errors can name their owner.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "fjgen.toml");
/// ctx.validate_name("Car", "struct")?;
///
/// let fields = ctx.push("Car");
/// fields.validate_name("make", "field")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: Arc<NamedSource<String>>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(NamedSource::new(filename, src.to_string()).with_language("toml")),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.inner()
    }

    pub fn filename(&self) -> &str {
        self.source.name()
    }

    /// An error pointing into this file.
    pub fn reject(&self, problem: Problem, span: Option<SourceSpan>) -> Box<Error> {
        Error::declaration(&self.source, problem, span)
    }

    pub(crate) fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        Error::parse(&self.source, source)
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe `kind` relative to the current path, e.g. "field in 'Car'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.src(), name)
    }

    /// Span of a quoted string value such as `type = "List<String>"`.
    pub fn find_value_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.src(), value)
    }

    /// Validate that a name is a usable Java identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_java_keyword(name) {
            return Err(self.reject(
                Problem::ReservedKeyword {
                    name: name.to_string(),
                    context: self.context_for(kind),
                },
                self.find_span(name),
            ));
        }

        if let Some(reason) = is_java_identifier(name) {
            return Err(self.reject(
                Problem::InvalidIdentifier {
                    name: name.to_string(),
                    context: self.context_for(kind),
                    reason: reason.to_string(),
                },
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate a dotted name such as a package or a nested spec name.
    pub fn validate_dotted_name(&self, name: &str, kind: &str) -> Result<()> {
        if name.is_empty() {
            return Err(self.reject(
                Problem::Invalid(format!("{} cannot be empty", self.context_for(kind))),
                None,
            ));
        }
        for segment in name.split('.') {
            self.validate_name(segment, kind)?;
        }
        Ok(())
    }
}

/// Java reserved words, including the literals `true`, `false` and `null`.
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "var", "record", "yield",
];

pub fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Find the span of a name in the TOML source.
///
/// Searches table headers (`[structs.Car]`), inline tables (`{ name = ...`)
/// and `name = "value"` pairs. No span is better than a wrong one.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    for pattern in [format!(".{}]", name), format!(".{}.", name)] {
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    for quote in ['"', '\''] {
        for pattern in [
            format!("name = {quote}{name}{quote}"),
            format!("name={quote}{name}{quote}"),
        ] {
            if let Some(pos) = src.find(&pattern) {
                let start = pos + pattern.len() - name.len() - 1;
                return Some(SourceSpan::from((start, name.len())));
            }
        }
    }

    None
}

pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}
