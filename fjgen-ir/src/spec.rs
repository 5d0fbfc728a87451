//! Struct generation requests.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Getter, SpecError, Type};

/// Whether the developer's declaration is a class or an interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Class,
    #[default]
    Interface,
}

/// Generation switches for one declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configurations {
    /// Emit a constructor taking no arguments.
    pub no_arg_constructor: bool,
    /// Make the all-args constructor public (private otherwise).
    pub all_args_constructor_public: bool,
    /// Emit the nested lens class and static lens instances.
    pub generate_lens: bool,
    /// Emit the staged builder.
    pub generate_builder: bool,
    /// Expose fields as `public final` instead of `private final`.
    pub public_fields: bool,
    /// Extend/implement the spec declaration.
    pub couple_with_definition: bool,
}

impl Default for Configurations {
    fn default() -> Self {
        Self {
            no_arg_constructor: false,
            all_args_constructor_public: true,
            generate_lens: true,
            generate_builder: true,
            public_fields: false,
            couple_with_definition: true,
        }
    }
}

/// The request to generate one struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    pub spec_name: String,
    pub spec_package: String,
    pub target_name: String,
    pub target_package: String,
    #[serde(default)]
    pub source_kind: SourceKind,
    #[serde(default)]
    pub config: Configurations,
    pub getters: Vec<Getter>,
    /// Full names of other types that carry a generated lens.
    #[serde(default)]
    pub types_with_lens: Vec<String>,
}

impl SourceSpec {
    /// A struct `target_name` in `package`, declared by `<target_name>Def`.
    pub fn new(package: impl Into<String>, target_name: impl Into<String>) -> Self {
        let package = package.into();
        let target_name = target_name.into();
        Self {
            spec_name: format!("{}Def", target_name),
            spec_package: package.clone(),
            target_name,
            target_package: package,
            source_kind: SourceKind::Interface,
            config: Configurations::default(),
            getters: Vec::new(),
            types_with_lens: Vec::new(),
        }
    }

    /// Set the declaring spec (may be nested, e.g. `Outer.CarDef`).
    pub fn spec(mut self, package: impl Into<String>, name: impl Into<String>) -> Self {
        self.spec_package = package.into();
        self.spec_name = name.into();
        self
    }

    pub fn source_kind(mut self, kind: SourceKind) -> Self {
        self.source_kind = kind;
        self
    }

    pub fn config(mut self, config: Configurations) -> Self {
        self.config = config;
        self
    }

    pub fn getter(mut self, getter: Getter) -> Self {
        self.getters.push(getter);
        self
    }

    pub fn getters(mut self, getters: impl IntoIterator<Item = Getter>) -> Self {
        self.getters.extend(getters);
        self
    }

    /// Register another type whose generated lens may be referenced.
    pub fn type_with_lens(mut self, full_name: impl Into<String>) -> Self {
        self.types_with_lens.push(full_name.into());
        self
    }

    pub fn target_type(&self) -> Type {
        Type::new(&self.target_package, &self.target_name)
    }

    pub fn spec_type(&self) -> Type {
        Type::of(&format!("{}.{}", self.spec_package, self.spec_name))
    }

    /// Whether `ty` has its own generated lens (including this struct itself).
    pub fn has_lens(&self, ty: &Type) -> bool {
        let full_name = ty.erasure().full_name();
        full_name == self.target_type().full_name()
            || self.types_with_lens.iter().any(|name| *name == full_name)
    }

    /// Reject inconsistent requests before anything is emitted.
    pub fn validate(&self) -> Result<(), SpecError> {
        let mut seen = HashSet::new();
        for getter in &self.getters {
            if !seen.insert(getter.name.as_str()) {
                return Err(SpecError::DuplicateField {
                    spec: self.target_name.clone(),
                    field: getter.name.clone(),
                });
            }
            getter.validate(&self.target_name)?;
        }

        if self.config.no_arg_constructor
            && let Some(getter) = self.getters.iter().find(|g| g.resolved_default().is_none())
        {
            return Err(SpecError::NoDefaultForRequired {
                spec: self.target_name.clone(),
                field: getter.name.clone(),
                ty: getter.ty.to_string(),
            });
        }
        Ok(())
    }
}
