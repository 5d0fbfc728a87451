//! Struct fields and their default-value policies.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{SpecError, Type, TypeShape};

/// How a field is filled when the caller does not supply it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefaultValue {
    /// The value must always be supplied.
    #[default]
    Required,
    Null,
    Zero,
    Empty,
    MinusOne,
    /// A Java expression used verbatim.
    Literal(String),
}

impl DefaultValue {
    /// Name of the matching constant in the runtime `DefaultValue` enum.
    pub fn java_constant(&self) -> &'static str {
        match self {
            Self::Required => "REQUIRED",
            Self::Null => "NULL",
            Self::Zero => "ZERO",
            Self::Empty => "EMPTY",
            Self::MinusOne => "MINUS_ONE",
            Self::Literal(_) => "SPECIFIED",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }

    /// The Java expression this policy produces for `ty`.
    ///
    /// Returns `None` when the policy does not apply to the type (for example
    /// `NULL` on a primitive) or, for `REQUIRED`, when the type has no
    /// language default.
    pub fn code_for(&self, ty: &Type) -> Option<String> {
        let declared = ty.declared_type().full_name();
        let code = match self {
            Self::Required => ty.default_value()?,
            Self::Null if ty.is_primitive() => return None,
            Self::Null => "null",
            Self::Zero => match declared.as_str() {
                "java.lang.Integer" => "0",
                "java.lang.Long" => "0L",
                "java.lang.Double" => "0.0",
                "java.lang.Float" => "0.0f",
                "java.lang.Short" => "(short)0",
                "java.lang.Byte" => "(byte)0",
                "java.math.BigDecimal" => "java.math.BigDecimal.ZERO",
                "java.math.BigInteger" => "java.math.BigInteger.ZERO",
                _ => return None,
            },
            Self::MinusOne => match declared.as_str() {
                "java.lang.Integer" => "-1",
                "java.lang.Long" => "-1L",
                "java.lang.Double" => "-1.0",
                "java.lang.Float" => "-1.0f",
                "java.lang.Short" => "(short)-1",
                "java.lang.Byte" => "(byte)-1",
                "java.math.BigDecimal" => "java.math.BigDecimal.ONE.negate()",
                "java.math.BigInteger" => "java.math.BigInteger.ONE.negate()",
                _ => return None,
            },
            Self::Empty => match ty.shape() {
                TypeShape::String => "\"\"",
                TypeShape::List => "java.util.Collections.emptyList()",
                TypeShape::FuncList => "functionalj.list.ImmutableFuncList.empty()",
                TypeShape::Map => "java.util.Collections.emptyMap()",
                TypeShape::FuncMap => "functionalj.map.ImmutableFuncMap.empty()",
                TypeShape::Optional => "java.util.Optional.empty()",
                TypeShape::Nullable => "nullablej.nullable.Nullable.empty()",
                _ if declared == "java.util.Set" => "java.util.Collections.emptySet()",
                _ => return None,
            },
            Self::Literal(code) => return Some(code.clone()),
        };
        Some(code.to_string())
    }

    /// Describes the types this policy applies to, for error messages.
    fn expected(&self) -> &'static str {
        match self {
            Self::Null => "a reference type",
            Self::Zero | Self::MinusOne => "a numeric type",
            Self::Empty => "a string, collection, map or optional type",
            Self::Required | Self::Literal(_) => "any type",
        }
    }
}

impl FromStr for DefaultValue {
    type Err = Infallible;

    /// Keywords are matched case-insensitively; anything else is a literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "required" => Self::Required,
            "null" => Self::Null,
            "zero" => Self::Zero,
            "empty" => Self::Empty,
            "minus-one" => Self::MinusOne,
            _ => Self::Literal(s.trim().to_string()),
        })
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(code) => write!(f, "{}", code),
            other => write!(f, "{}", other.java_constant()),
        }
    }
}

/// One field of a struct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Getter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub default_value: DefaultValue,
}

impl Getter {
    /// A required, non-nullable field.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: false,
            default_value: DefaultValue::Required,
        }
    }

    /// Mark the field as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Set the default-value policy.
    pub fn with_default(mut self, default_value: DefaultValue) -> Self {
        self.default_value = default_value;
        self
    }

    /// Whether callers must always supply this field.
    pub fn is_required(&self) -> bool {
        self.default_value.is_required()
    }

    /// Java expression for the declared default policy, if any.
    pub fn default_value_code(&self) -> Option<String> {
        if self.is_required() {
            None
        } else {
            self.default_value.code_for(&self.ty)
        }
    }

    /// The value substituted when the field is omitted entirely.
    ///
    /// Defaulted fields use their policy; required fields fall back to the
    /// type's language default, or `null` when nullable.
    pub fn resolved_default(&self) -> Option<String> {
        match &self.default_value {
            DefaultValue::Required if self.nullable && !self.ty.is_primitive() => {
                Some("null".to_string())
            }
            policy => policy.code_for(&self.ty),
        }
    }

    /// Check the nullability/default combination.
    pub fn validate(&self, spec: &str) -> Result<(), SpecError> {
        if self.is_required() {
            return Ok(());
        }
        if !self.nullable {
            return Err(SpecError::DefaultOnNonNullable {
                spec: spec.to_string(),
                field: self.name.clone(),
                policy: self.default_value.to_string(),
            });
        }
        if self.default_value.code_for(&self.ty).is_none() {
            return Err(SpecError::DefaultMismatch {
                spec: spec.to_string(),
                field: self.name.clone(),
                policy: self.default_value.to_string(),
                ty: self.ty.to_string(),
                expected: self.default_value.expected(),
            });
        }
        Ok(())
    }
}
