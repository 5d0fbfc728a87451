//! Java declaration modifiers.

/// Access level of a class, field, constructor or method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accessibility {
    #[default]
    Public,
    Protected,
    /// No modifier.
    Package,
    Private,
}

impl Accessibility {
    /// The keyword followed by a space, or nothing for package access.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Public => "public ",
            Self::Protected => "protected ",
            Self::Package => "",
            Self::Private => "private ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modifiability {
    #[default]
    Final,
    Modifiable,
    /// Modifiable and `volatile`; only meaningful on fields.
    Volatile,
}

impl Modifiability {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Final => "final ",
            Self::Modifiable => "",
            Self::Volatile => "volatile ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    Instance,
    Static,
}

impl Scope {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Instance => "",
            Self::Static => "static ",
        }
    }
}

/// Whether a class or method carries an implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Concrete {
    #[default]
    Concrete,
    Abstract,
}

impl Concrete {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Concrete => "",
            Self::Abstract => "abstract ",
        }
    }
}
