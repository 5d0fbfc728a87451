//! Structural model of (possibly generic) Java types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Package names referenced by the type tables.
pub mod packages {
    pub const JAVA_LANG: &str = "java.lang";
    pub const JAVA_UTIL: &str = "java.util";
    pub const JAVA_UTIL_FUNCTION: &str = "java.util.function";
    pub const JAVA_MATH: &str = "java.math";
    pub const JAVA_TIME: &str = "java.time";
    pub const LENSES: &str = "functionalj.lens.lenses";
    pub const LENS_CORE: &str = "functionalj.lens.core";
    pub const FUNC_LIST: &str = "functionalj.list";
    pub const FUNC_MAP: &str = "functionalj.map";
    pub const RESULT: &str = "functionalj.result";
    pub const PIPEABLE: &str = "functionalj.pipeable";
    pub const TYPES: &str = "functionalj.types";
    pub const NULLABLE: &str = "nullablej.nullable";
}

use packages::*;

/// Wildcard marker for generic arguments.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Variance {
    /// Plain type argument: `T`.
    #[default]
    Exact,
    /// Upper-bounded wildcard: `? extends T`.
    Extends,
    /// Lower-bounded wildcard: `? super T`.
    Super,
}

/// Primitive name, boxed simple name, language default.
const PRIMITIVES: &[(&str, &str, &str)] = &[
    ("int", "Integer", "0"),
    ("long", "Long", "0L"),
    ("double", "Double", "0.0"),
    ("float", "Float", "0.0f"),
    ("boolean", "Boolean", "false"),
    ("char", "Character", "'\\0'"),
    ("byte", "Byte", "(byte)0"),
    ("short", "Short", "(short)0"),
];

/// Declared (boxed) full name to lens simple name.
const LENS_TABLE: &[(&str, &str)] = &[
    ("java.lang.Integer", "IntegerLens"),
    ("java.lang.Long", "LongLens"),
    ("java.lang.Double", "DoubleLens"),
    ("java.lang.Boolean", "BooleanLens"),
    ("java.lang.String", "StringLens"),
];

/// Simple names the front-end resolves without an explicit package.
const WELL_KNOWN: &[(&str, &str)] = &[
    ("String", JAVA_LANG),
    ("Object", JAVA_LANG),
    ("Number", JAVA_LANG),
    ("Integer", JAVA_LANG),
    ("Long", JAVA_LANG),
    ("Double", JAVA_LANG),
    ("Float", JAVA_LANG),
    ("Boolean", JAVA_LANG),
    ("Character", JAVA_LANG),
    ("Byte", JAVA_LANG),
    ("Short", JAVA_LANG),
    ("Exception", JAVA_LANG),
    ("RuntimeException", JAVA_LANG),
    ("Throwable", JAVA_LANG),
    ("List", JAVA_UTIL),
    ("Map", JAVA_UTIL),
    ("Set", JAVA_UTIL),
    ("Optional", JAVA_UTIL),
    ("BigDecimal", JAVA_MATH),
    ("BigInteger", JAVA_MATH),
    ("LocalDate", JAVA_TIME),
    ("LocalDateTime", JAVA_TIME),
    ("Instant", JAVA_TIME),
    ("FuncList", FUNC_LIST),
    ("ImmutableFuncList", FUNC_LIST),
    ("FuncMap", FUNC_MAP),
    ("ImmutableFuncMap", FUNC_MAP),
    ("Result", RESULT),
    ("Nullable", NULLABLE),
];

/// Recognized shape of a type, used to pick lens and default strategies.
///
/// This is a closed decision table: anything not listed is [`TypeShape::Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeShape {
    Int,
    Long,
    Double,
    Boolean,
    String,
    List,
    FuncList,
    Map,
    FuncMap,
    Nullable,
    Optional,
    Result,
    Object,
}

impl TypeShape {
    /// Whether the shape wraps element types that get their own sub-lens.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::List
                | Self::FuncList
                | Self::Map
                | Self::FuncMap
                | Self::Nullable
                | Self::Optional
                | Self::Result
        )
    }
}

/// An immutable, structural description of a Java type.
///
/// Equality and hashing are structural, so a `Type` can be used directly as a
/// set or map key when de-duplicating referenced types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Type {
    simple_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    package_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    enclosing_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    generics: Vec<Type>,
    #[serde(default, skip_serializing_if = "is_exact")]
    variance: Variance,
}

fn is_exact(variance: &Variance) -> bool {
    *variance == Variance::Exact
}

impl Type {
    /// A top-level class in `package`.
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            simple_name: simple_name.into(),
            package_name: Some(package.into()),
            enclosing_name: None,
            generics: Vec::new(),
            variance: Variance::Exact,
        }
    }

    /// A class nested in `enclosing` (which may itself be dotted, e.g. `Outer.Inner`).
    pub fn nested(
        package: impl Into<String>,
        enclosing: impl Into<String>,
        simple_name: impl Into<String>,
    ) -> Self {
        Self {
            enclosing_name: Some(enclosing.into()),
            ..Self::new(package, simple_name)
        }
    }

    /// A type variable such as `HOST` or `TARGET`.
    pub fn var(name: impl Into<String>) -> Self {
        Self {
            simple_name: name.into(),
            package_name: None,
            enclosing_name: None,
            generics: Vec::new(),
            variance: Variance::Exact,
        }
    }

    /// Build a type from a fully qualified name like `java.util.Map` or
    /// `com.example.Outer.Inner`.
    ///
    /// The first segment starting with an upper-case letter ends the package;
    /// segments between it and the last one form the enclosing name. Primitive
    /// names produce primitive types, and a name without any package produces a
    /// package-less type (a type variable or an unresolved name).
    pub fn of(fqn: &str) -> Self {
        let segments: Vec<&str> = fqn.split('.').filter(|s| !s.is_empty()).collect();
        let class_start = segments
            .iter()
            .position(|s| s.starts_with(|c: char| c.is_uppercase()))
            .unwrap_or(segments.len().saturating_sub(1));

        let Some((simple, classes)) = segments[class_start..].split_last() else {
            return Self::var(fqn);
        };
        if class_start == 0 {
            return Self::var(*simple);
        }

        let package = segments[..class_start].join(".");
        if classes.is_empty() {
            Self::new(package, *simple)
        } else {
            Self::nested(package, classes.join("."), *simple)
        }
    }

    /// Resolve a simple name against the fixed well-known table.
    pub fn well_known(simple_name: &str) -> Option<Self> {
        if PRIMITIVES.iter().any(|(p, _, _)| *p == simple_name) || simple_name == "void" {
            return Some(Self::var(simple_name));
        }
        WELL_KNOWN
            .iter()
            .find(|(name, _)| *name == simple_name)
            .map(|(name, package)| Self::new(*package, *name))
    }

    pub fn int() -> Self {
        Self::var("int")
    }

    pub fn long() -> Self {
        Self::var("long")
    }

    pub fn double() -> Self {
        Self::var("double")
    }

    pub fn boolean() -> Self {
        Self::var("boolean")
    }

    pub fn void() -> Self {
        Self::var("void")
    }

    pub fn string() -> Self {
        Self::new(JAVA_LANG, "String")
    }

    pub fn object() -> Self {
        Self::new(JAVA_LANG, "Object")
    }

    pub fn integer() -> Self {
        Self::new(JAVA_LANG, "Integer")
    }

    /// Return a copy with the given generic arguments attached.
    pub fn with_generics(&self, generics: impl IntoIterator<Item = Type>) -> Self {
        Self {
            generics: generics.into_iter().collect(),
            ..self.clone()
        }
    }

    /// Return a copy rendered as `? extends Self`.
    pub fn to_extends(&self) -> Self {
        Self {
            variance: Variance::Extends,
            ..self.clone()
        }
    }

    /// Return a copy rendered as `? super Self`.
    pub fn to_super(&self) -> Self {
        Self {
            variance: Variance::Super,
            ..self.clone()
        }
    }

    /// Return a copy without the wildcard, keeping generic arguments.
    pub fn exact(&self) -> Self {
        Self {
            variance: Variance::Exact,
            ..self.clone()
        }
    }

    /// Return a copy without generic arguments or wildcard.
    pub fn erasure(&self) -> Self {
        Self {
            generics: Vec::new(),
            variance: Variance::Exact,
            ..self.clone()
        }
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }

    pub fn enclosing_name(&self) -> Option<&str> {
        self.enclosing_name.as_deref()
    }

    pub fn generics(&self) -> &[Type] {
        &self.generics
    }

    pub fn variance(&self) -> Variance {
        self.variance
    }

    /// The generic argument at `index`, if declared.
    pub fn type_arg(&self, index: usize) -> Option<&Type> {
        self.generics.get(index)
    }

    /// The name as written inside the package, e.g. `Outer.Inner`.
    pub fn local_name(&self) -> String {
        match &self.enclosing_name {
            Some(enclosing) => format!("{}.{}", enclosing, self.simple_name),
            None => self.simple_name.clone(),
        }
    }

    /// Fully qualified name without generics, e.g. `java.util.Map`.
    pub fn full_name(&self) -> String {
        match &self.package_name {
            Some(package) => format!("{}.{}", package, self.local_name()),
            None => self.local_name(),
        }
    }

    /// The class that must be imported to refer to this type by its local name.
    ///
    /// Nested classes import their outermost enclosing class. Primitives and
    /// type variables need no import.
    pub fn import_name(&self) -> Option<String> {
        let package = self.package_name.as_deref()?;
        let top = match &self.enclosing_name {
            Some(enclosing) => enclosing.split('.').next().unwrap_or(enclosing),
            None => &self.simple_name,
        };
        Some(format!("{}.{}", package, top))
    }

    pub fn is_primitive(&self) -> bool {
        self.package_name.is_none()
            && PRIMITIVES.iter().any(|(p, _, _)| *p == self.simple_name)
    }

    pub fn is_void(&self) -> bool {
        self.package_name.is_none() && self.simple_name == "void"
    }

    /// A package-less type that is neither primitive nor void.
    pub fn is_type_var(&self) -> bool {
        self.package_name.is_none() && !self.is_primitive() && !self.is_void()
    }

    /// The boxed form for primitives; identity otherwise.
    pub fn declared_type(&self) -> Type {
        PRIMITIVES
            .iter()
            .find(|(p, _, _)| self.package_name.is_none() && *p == self.simple_name)
            .map(|(_, boxed, _)| Type::new(JAVA_LANG, *boxed))
            .unwrap_or_else(|| self.clone())
    }

    /// The Java language default for primitive kinds; `None` for everything else.
    pub fn default_value(&self) -> Option<&'static str> {
        PRIMITIVES
            .iter()
            .find(|(p, _, _)| self.package_name.is_none() && *p == self.simple_name)
            .map(|(_, _, default)| *default)
    }

    /// The recognized shape of this type (primitives are viewed through their boxed form).
    pub fn shape(&self) -> TypeShape {
        match self.declared_type().full_name().as_str() {
            "java.lang.Integer" => TypeShape::Int,
            "java.lang.Long" => TypeShape::Long,
            "java.lang.Double" => TypeShape::Double,
            "java.lang.Boolean" => TypeShape::Boolean,
            "java.lang.String" => TypeShape::String,
            "java.util.List" => TypeShape::List,
            "functionalj.list.FuncList" | "functionalj.list.ImmutableFuncList" => {
                TypeShape::FuncList
            }
            "java.util.Map" => TypeShape::Map,
            "functionalj.map.FuncMap" | "functionalj.map.ImmutableFuncMap" => TypeShape::FuncMap,
            "nullablej.nullable.Nullable" => TypeShape::Nullable,
            "java.util.Optional" => TypeShape::Optional,
            "functionalj.result.Result" => TypeShape::Result,
            _ => TypeShape::Object,
        }
    }

    pub fn is_string(&self) -> bool {
        self.shape() == TypeShape::String
    }

    /// Numeric primitives and their boxed forms.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self.declared_type().full_name().as_str(),
            "java.lang.Integer"
                | "java.lang.Long"
                | "java.lang.Double"
                | "java.lang.Float"
                | "java.lang.Short"
                | "java.lang.Byte"
        )
    }

    /// The conventional lens type for this type, parameterized with `host`.
    ///
    /// Looks up the fixed table first (`int` → `IntegerLens<HOST>`, `String` →
    /// `StringLens<HOST>`, ...). Otherwise returns `fallback` when given, or
    /// synthesizes `<Simple>.<Simple>Lens<HOST>` next to the declared type.
    pub fn lens_type(&self, host: &Type, fallback: Option<Type>) -> Type {
        let declared = self.declared_type();
        let full_name = declared.full_name();
        if let Some((_, lens)) = LENS_TABLE.iter().find(|(name, _)| *name == full_name) {
            return Type::new(LENSES, *lens).with_generics([host.clone()]);
        }
        if let Some(fallback) = fallback {
            return fallback;
        }
        let enclosing = declared.local_name();
        let lens_name = format!("{}Lens", declared.simple_name);
        let lens = match declared.package_name {
            Some(package) => Type::nested(package, enclosing, lens_name),
            None => Type::var(lens_name),
        };
        lens.with_generics([host.clone()])
    }

    /// This type followed by every generic argument, depth first.
    pub fn walk(&self) -> Vec<&Type> {
        let mut types = vec![self];
        for generic in &self.generics {
            types.extend(generic.walk());
        }
        types
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variance {
            Variance::Exact => {}
            Variance::Extends => write!(f, "? extends ")?,
            Variance::Super => write!(f, "? super ")?,
        }
        let qualified = self
            .import_name()
            .is_some_and(|import| crate::naming::is_qualified(&import));
        if qualified {
            write!(f, "{}", self.full_name())?;
        } else {
            write!(f, "{}", self.local_name())?;
        }
        if !self.generics.is_empty() {
            let args: Vec<String> = self.generics.iter().map(ToString::to_string).collect();
            write!(f, "<{}>", args.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_splits_package() {
        let ty = Type::of("java.util.Map");
        assert_eq!(ty.package_name(), Some("java.util"));
        assert_eq!(ty.simple_name(), "Map");
        assert_eq!(ty.enclosing_name(), None);
    }

    #[test]
    fn test_of_nested() {
        let ty = Type::of("com.example.Outer.Inner");
        assert_eq!(ty.package_name(), Some("com.example"));
        assert_eq!(ty.enclosing_name(), Some("Outer"));
        assert_eq!(ty.simple_name(), "Inner");
        assert_eq!(ty.to_string(), "Outer.Inner");
        assert_eq!(ty.import_name().as_deref(), Some("com.example.Outer"));
    }

    #[test]
    fn test_of_without_package() {
        let ty = Type::of("T");
        assert!(ty.is_type_var());
        assert!(Type::of("int").is_primitive());
    }

    #[test]
    fn test_with_generics_does_not_mutate() {
        let list = Type::new(JAVA_UTIL, "List");
        let strings = list.with_generics([Type::string()]);
        assert!(list.generics().is_empty());
        assert_eq!(strings.to_string(), "List<String>");
        assert_ne!(list, strings);
        assert_eq!(strings.erasure(), list);
    }

    #[test]
    fn test_wildcards() {
        let map = Type::new(JAVA_UTIL, "Map")
            .with_generics([Type::string(), Type::object().to_extends()]);
        assert_eq!(map.to_string(), "Map<String, ? extends Object>");
        assert_eq!(
            Type::var("Accepted").to_super().to_string(),
            "? super Accepted"
        );
    }

    #[test]
    fn test_declared_type() {
        assert_eq!(Type::int().declared_type(), Type::integer());
        assert_eq!(
            Type::boolean().declared_type(),
            Type::new(JAVA_LANG, "Boolean")
        );
        assert_eq!(Type::string().declared_type(), Type::string());
    }

    #[test]
    fn test_default_value() {
        assert_eq!(Type::int().default_value(), Some("0"));
        assert_eq!(Type::long().default_value(), Some("0L"));
        assert_eq!(Type::boolean().default_value(), Some("false"));
        assert_eq!(Type::string().default_value(), None);
        assert_eq!(Type::integer().default_value(), None);
    }

    #[test]
    fn test_lens_type_table() {
        let host = Type::var("HOST");
        assert_eq!(
            Type::int().lens_type(&host, None).to_string(),
            "IntegerLens<HOST>"
        );
        assert_eq!(
            Type::string().lens_type(&host, None).to_string(),
            "StringLens<HOST>"
        );
        assert_eq!(
            Type::boolean().lens_type(&host, None).package_name(),
            Some(LENSES)
        );
    }

    #[test]
    fn test_lens_type_fallback_and_synthesized() {
        let host = Type::var("HOST");
        let person = Type::new("com.example", "Person");
        let synthesized = person.lens_type(&host, None);
        assert_eq!(synthesized.to_string(), "Person.PersonLens<HOST>");
        assert_eq!(synthesized.package_name(), Some("com.example"));

        let fallback = Type::new(LENSES, "ObjectLens").with_generics([host.clone(), person.clone()]);
        assert_eq!(
            person.lens_type(&host, Some(fallback.clone())),
            fallback
        );
        // The fixed table wins over the fallback.
        assert_eq!(
            Type::string().lens_type(&host, Some(fallback)).simple_name(),
            "StringLens"
        );
    }

    #[test]
    fn test_shape() {
        assert_eq!(Type::int().shape(), TypeShape::Int);
        assert_eq!(Type::integer().shape(), TypeShape::Int);
        assert_eq!(Type::string().shape(), TypeShape::String);
        assert_eq!(
            Type::new(JAVA_UTIL, "List")
                .with_generics([Type::string()])
                .shape(),
            TypeShape::List
        );
        assert_eq!(Type::new(FUNC_MAP, "FuncMap").shape(), TypeShape::FuncMap);
        assert_eq!(
            Type::new("com.other", "Widget").shape(),
            TypeShape::Object
        );
        assert!(TypeShape::Optional.is_container());
        assert!(!TypeShape::String.is_container());
    }

    #[test]
    fn test_well_known() {
        assert_eq!(Type::well_known("String"), Some(Type::string()));
        assert_eq!(
            Type::well_known("FuncList").and_then(|t| t.import_name()),
            Some("functionalj.list.FuncList".to_string())
        );
        assert!(Type::well_known("int").is_some_and(|t| t.is_primitive()));
        assert_eq!(Type::well_known("Car"), None);
    }

    #[test]
    fn test_walk_visits_generics() {
        let ty = Type::new(JAVA_UTIL, "Map").with_generics([
            Type::string(),
            Type::new(JAVA_UTIL, "List").with_generics([Type::integer()]),
        ]);
        let names: Vec<&str> = ty.walk().iter().map(|t| t.simple_name()).collect();
        assert_eq!(names, vec!["Map", "String", "List", "Integer"]);
    }
}
