use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// A manifest that could not be loaded.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'fjgen init' to create a starter fjgen.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", src.name())]
    #[diagnostic(code(fjgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    /// Well-formed TOML declaring something that cannot be generated.
    #[error("{problem}")]
    #[diagnostic(forward(problem))]
    Declaration {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        problem: Problem,
    },
}

impl Error {
    pub(crate) fn parse(src: &NamedSource<String>, source: toml::de::Error) -> Box<Self> {
        Box::new(Self::Parse {
            src: src.clone(),
            span: source.span().map(SourceSpan::from),
            source,
        })
    }

    pub(crate) fn declaration(
        src: &NamedSource<String>,
        problem: Problem,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Self::Declaration {
            src: src.clone(),
            span,
            problem,
        })
    }

    /// The declaration problem, if the file parsed as TOML at all.
    pub fn problem(&self) -> Option<&Problem> {
        match self {
            Self::Declaration { problem, .. } => Some(problem),
            _ => None,
        }
    }
}

/// Why a declared name, type or default cannot be turned into Java.
#[derive(Debug, Error, Diagnostic)]
pub enum Problem {
    #[error("{0}")]
    #[diagnostic(code(fjgen::validation_error))]
    Invalid(String),

    #[error("'{name}' is a Java reserved keyword")]
    #[diagnostic(
        code(fjgen::reserved_keyword),
        help("rename '{name}' ({context}), e.g. '{name}Value'")
    )]
    ReservedKeyword { name: String, context: String },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(fjgen::invalid_identifier),
        help("{reason}. Java identifiers use letters, digits, '_' and '$', and cannot start with a digit.")
    )]
    InvalidIdentifier {
        name: String,
        context: String,
        reason: String,
    },

    #[error("invalid type '{ty}' for {owner}")]
    #[diagnostic(
        code(fjgen::invalid_type),
        help("{reason}. Types look like 'int', 'String', 'List<String>' or 'java.time.LocalDate'.")
    )]
    InvalidType {
        ty: String,
        owner: String,
        reason: String,
    },
}
