//! Manifest types and parsing for fjgen.toml files.

mod parse;
mod validate;

use std::collections::BTreeMap;

use serde::Deserialize;
pub use validate::{JAVA_KEYWORDS, ParseContext, is_java_keyword};

use crate::{ChoiceDecl, StructDecl};

/// Root manifest for fjgen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub package: PackageConfig,

    /// Struct declarations, keyed by target class name
    #[serde(default)]
    pub structs: BTreeMap<String, StructDecl>,

    /// Choice declarations, keyed by target class name
    #[serde(default)]
    pub choices: BTreeMap<String, ChoiceDecl>,
}

/// `[package]`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PackageConfig {
    /// Package of the generated classes
    pub name: String,
    /// Package of the declaring spec types, defaults to `name`
    pub spec_package: Option<String>,
}

impl PackageConfig {
    pub fn spec_package(&self) -> &str {
        self.spec_package.as_deref().unwrap_or(&self.name)
    }
}

impl Manifest {
    /// Whether a struct or choice with this simple name is declared.
    pub fn has_type(&self, name: &str) -> bool {
        self.structs.contains_key(name) || self.choices.contains_key(name)
    }

    /// Declared type names, structs first.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.structs
            .keys()
            .chain(self.choices.keys())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.structs.is_empty() && self.choices.is_empty()
    }
}
