use thiserror::Error;

/// A malformed generation request.
///
/// These are raised while building the model, before any source text is
/// emitted. Every variant names the owning spec and the offending member.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error(
        "field '{field}' of '{spec}' is not nullable but declares default '{policy}'; only nullable fields may have a default"
    )]
    DefaultOnNonNullable {
        spec: String,
        field: String,
        policy: String,
    },

    #[error(
        "field '{field}' of '{spec}' declares default '{policy}', which does not apply to type '{ty}' (expected {expected})"
    )]
    DefaultMismatch {
        spec: String,
        field: String,
        policy: String,
        ty: String,
        expected: &'static str,
    },

    #[error("field '{field}' is declared more than once in '{spec}'")]
    DuplicateField { spec: String, field: String },

    #[error("case '{case}' is declared more than once in '{spec}'")]
    DuplicateCase { spec: String, case: String },

    #[error("choice '{spec}' declares no cases")]
    EmptyChoice { spec: String },

    #[error("case '{case}' of '{spec}' has the same name as the choice itself")]
    CaseNamedAfterChoice { spec: String, case: String },

    #[error("case '{case}' of '{spec}' clashes with the generated nested type '{reserved}'")]
    ReservedCaseName {
        spec: String,
        case: String,
        reserved: String,
    },

    #[error(
        "'{spec}' requests a no-arg constructor but required field '{field}' of type '{ty}' has no default value"
    )]
    NoDefaultForRequired {
        spec: String,
        field: String,
        ty: String,
    },
}

impl SpecError {
    /// Name of the spec that triggered the error.
    pub fn spec(&self) -> &str {
        match self {
            Self::DefaultOnNonNullable { spec, .. }
            | Self::DefaultMismatch { spec, .. }
            | Self::DuplicateField { spec, .. }
            | Self::DuplicateCase { spec, .. }
            | Self::EmptyChoice { spec }
            | Self::CaseNamedAfterChoice { spec, .. }
            | Self::ReservedCaseName { spec, .. }
            | Self::NoDefaultForRequired { spec, .. } => spec,
        }
    }
}
