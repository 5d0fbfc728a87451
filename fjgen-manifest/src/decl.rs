//! Struct and choice declaration tables.

use fjgen_ir::{Configurations, DefaultValue, SourceKind};
use serde::Deserialize;

/// `[structs.<Name>]`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct StructDecl {
    /// Name of the declaring spec type, defaults to `<Name>Def`.
    pub spec: Option<String>,
    #[serde(default)]
    pub source_kind: SourceKind,
    #[serde(default)]
    pub config: Configurations,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

/// One field of a struct, or one parameter of a choice case.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub nullable: bool,
    /// `"null"`, `"zero"`, `"empty"`, `"minus-one"`, or a Java expression.
    /// Numbers and booleans are taken as literal expressions.
    pub default: Option<toml::Value>,
}

impl FieldDecl {
    /// The declared default policy.
    ///
    /// Returns `None` for values that cannot be a default (arrays, tables).
    pub fn default_value(&self) -> Option<DefaultValue> {
        match &self.default {
            None => Some(DefaultValue::Required),
            Some(toml::Value::String(s)) => s.parse().ok(),
            Some(toml::Value::Integer(i)) => Some(DefaultValue::Literal(i.to_string())),
            Some(toml::Value::Float(f)) => Some(DefaultValue::Literal(format!("{:?}", f))),
            Some(toml::Value::Boolean(b)) => Some(DefaultValue::Literal(b.to_string())),
            Some(_) => None,
        }
    }
}

/// `[choices.<Name>]`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ChoiceDecl {
    /// Name of the declaring spec type, defaults to `<Name>Spec`.
    pub spec: Option<String>,
    #[serde(default = "default_true")]
    pub generate_lens: bool,
    #[serde(default)]
    pub cases: Vec<CaseDecl>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseDecl {
    pub name: String,
    #[serde(default)]
    pub params: Vec<FieldDecl>,
}
