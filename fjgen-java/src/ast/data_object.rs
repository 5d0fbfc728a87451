//! A complete generated type: one top-level class bound to its package.

use eyre::Result;
use fjgen_ir::Type;
use indexmap::IndexSet;

use super::ClassSpec;
use crate::{
    imports::{ImportResolver, ResolvedNames},
    java_file::JavaFile,
};

/// The output of the struct and choice builders, ready to be rendered into a
/// single Java source file.
#[derive(Debug, Clone, PartialEq)]
pub struct DataObjectSpec {
    pub package: String,
    /// The declaration this type was generated from.
    pub source_spec: Type,
    pub class: ClassSpec,
}

impl DataObjectSpec {
    pub fn new(package: impl Into<String>, source_spec: Type, class: ClassSpec) -> Self {
        Self {
            package: package.into(),
            source_spec,
            class,
        }
    }

    pub fn name(&self) -> &str {
        self.class.name()
    }

    pub fn target_type(&self) -> Type {
        Type::new(&self.package, self.class.name())
    }

    /// Every referenced type, de-duplicated and without generic arguments,
    /// in first-use order.
    pub fn required_types(&self) -> IndexSet<Type> {
        self.class
            .required_types()
            .into_iter()
            .map(|ty| ty.erasure())
            .collect()
    }

    /// Decide the imports and the classes that must be written in full.
    pub fn resolve_names(&self) -> ResolvedNames {
        ImportResolver::new(&self.package, &self.target_type())
            .reserve(self.class.nested_names())
            .resolve(self.required_types().iter())
    }

    /// Render with `names` in effect. Member bodies built outside that scope
    /// keep whatever names they were built with.
    pub fn to_java_file(&self, names: &ResolvedNames) -> JavaFile {
        names.scope(|| {
            JavaFile::new(&self.package, self.name())
                .imports(names.imports.iter().cloned())
                .body(self.class.clone())
        })
    }

    /// Build a type and render it with every name resolved.
    ///
    /// Member bodies are formatted while building, so when some class has to
    /// be written fully qualified the type is built again inside that scope.
    pub fn emit(build: impl Fn() -> Result<DataObjectSpec>) -> Result<JavaFile> {
        let draft = build()?;
        let names = draft.resolve_names();
        if names.qualified.is_empty() {
            return Ok(draft.to_java_file(&names));
        }
        tracing::debug!(
            class = %draft.target_type().full_name(),
            qualified = names.qualified.len(),
            "rebuilding with qualified names"
        );
        let object = names.scope(build)?;
        Ok(object.to_java_file(&names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::GenField;

    #[test]
    fn test_required_types_are_erased_and_unique() {
        let list = Type::new("java.util", "List").with_generics([Type::string()]);
        let class = ClassSpec::new(Type::new("com.example", "Car"))
            .field(GenField::new(list.clone(), "a"))
            .field(GenField::new(list, "b"));
        let spec = DataObjectSpec::new("com.example", Type::new("com.example", "CarDef"), class);
        let names: Vec<String> = spec
            .required_types()
            .iter()
            .map(Type::full_name)
            .collect();
        assert_eq!(names, vec!["java.util.List", "java.lang.String"]);
    }

    #[test]
    fn test_imports_skip_java_lang() {
        let list = Type::new("java.util", "List").with_generics([Type::string()]);
        let class =
            ClassSpec::new(Type::new("com.example", "Car")).field(GenField::new(list, "tags"));
        let spec = DataObjectSpec::new("com.example", Type::new("com.example", "CarDef"), class);
        assert_eq!(spec.resolve_names().imports, vec!["import java.util.List;"]);
    }

    #[test]
    fn test_nested_class_shadows_same_package_type() {
        let class = ClassSpec::new(Type::new("com.example", "Car"))
            .field(GenField::new(Type::new("com.example", "Builder"), "source"))
            .inner_class(ClassSpec::new(Type::nested("com.example", "Car", "Builder")));
        let spec = DataObjectSpec::new("com.example", Type::new("com.example", "CarDef"), class);
        let rendered = spec.to_java_file(&spec.resolve_names()).render();
        assert!(rendered.contains("private final com.example.Builder source;"));
        assert!(rendered.contains("public class Builder {"));
    }

    #[test]
    fn test_emit_rebuilds_bodies_inside_scope() {
        let build = || {
            let map = Type::new("java.util", "Map");
            let class = ClassSpec::new(Type::new("com.example", "Ledger"))
                .field(GenField::new(Type::new("com.money", "Map"), "total"))
                .field(GenField::new(map.clone(), "entries").value(format!("new {}()", map)));
            Ok(DataObjectSpec::new(
                "com.example",
                Type::new("com.example", "LedgerDef"),
                class,
            ))
        };
        let rendered = DataObjectSpec::emit(build).unwrap().render();
        assert!(rendered.contains("import com.money.Map;"));
        assert!(!rendered.contains("import java.util.Map;"));
        assert!(rendered.contains("private final Map total;"));
        assert!(rendered.contains("java.util.Map entries = new java.util.Map();"));
    }
}
