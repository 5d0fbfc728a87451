//! Problems found while compiling declarations.

use std::fmt;

/// Whether a diagnostic blocks generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Generation is refused until this is fixed.
    Error,
    /// Sources are still generated.
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        *self == Self::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
        })
    }
}

/// One finding, optionally pointing at a manifest path such as
/// `structs.Car.make` or `choices.Light.On`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// The phase that produced it.
    pub phase: &'static str,
    pub message: String,
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn error(phase: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            phase,
            message: message.into(),
            location: None,
        }
    }

    pub fn warning(phase: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(phase, message)
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// The message with the location on a `-->` line below it.
    pub fn detail(&self) -> String {
        match &self.location {
            Some(location) => format!("{}\n  --> {}", self.message, location),
            None => self.message.clone(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(location) = &self.location {
            write!(f, " (at {})", location)?;
        }
        Ok(())
    }
}
