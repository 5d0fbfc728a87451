//! Import resolution for a generated Java file.

use std::collections::{BTreeSet, HashMap};

use fjgen_codegen::generation::ImportCollector;
use fjgen_ir::{Type, packages::JAVA_LANG, with_qualified_names};

/// `java.lang` classes that generated bodies name as plain text.
const IMPLICIT: &[&str] = &[
    "Object",
    "String",
    "Override",
    "SuppressWarnings",
    "FunctionalInterface",
    "IllegalArgumentException",
];

/// Packages whose classes yield their simple name to user types.
const RUNTIME_PREFIXES: &[&str] = &["java.", "javax.", "functionalj.", "nullablej."];

/// The outcome of resolving every name a generated file refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedNames {
    /// Sorted `import` lines.
    pub imports: Vec<String>,
    /// Classes (by import name) that must be written fully qualified.
    pub qualified: BTreeSet<String>,
}

impl ResolvedNames {
    /// Run `f` with the qualified classes in effect for type rendering.
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        with_qualified_names(&self.qualified, f)
    }
}

/// Decides which referenced types get an `import` line and which must be
/// written in full.
///
/// A simple name belongs to one class per file. The target, its nested
/// classes and the implicit `java.lang` names are claimed first, then user
/// types, then runtime types. A class whose simple name is already taken is
/// qualified. Primitives, type variables, `java.lang` and the target package
/// never need an import.
#[derive(Debug, Clone)]
pub struct ImportResolver {
    package: String,
    target: Type,
    reserved: Vec<String>,
}

impl ImportResolver {
    pub fn new(package: impl Into<String>, target: &Type) -> Self {
        Self {
            package: package.into(),
            target: target.erasure(),
            reserved: Vec::new(),
        }
    }

    /// Simple names declared inside the target, which shadow imports.
    pub fn reserve(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.reserved.extend(names);
        self
    }

    pub fn resolve<'a>(&self, types: impl IntoIterator<Item = &'a Type>) -> ResolvedNames {
        let target = self.target.full_name();
        let mut claims: HashMap<String, String> = HashMap::new();
        claims.insert(self.target.simple_name().to_string(), target.clone());
        for name in &self.reserved {
            claims
                .entry(name.clone())
                .or_insert_with(|| format!("{}.{}", target, name));
        }
        for name in IMPLICIT {
            claims
                .entry(name.to_string())
                .or_insert_with(|| format!("{}.{}", JAVA_LANG, name));
        }

        let (user, runtime): (Vec<&Type>, Vec<&Type>) = types
            .into_iter()
            .partition(|ty| !ty.package_name().is_some_and(is_runtime_package));

        let mut collector = ImportCollector::new();
        let mut qualified = BTreeSet::new();
        for ty in user.into_iter().chain(runtime) {
            let Some(import) = ty.import_name() else {
                continue;
            };
            if import == target {
                continue;
            }
            let simple = import.rsplit('.').next().unwrap_or(&import).to_string();
            match claims.get(&simple) {
                Some(owner) if *owner == import => continue,
                Some(owner) => {
                    tracing::debug!(
                        class = %import,
                        shadowed_by = %owner,
                        "simple name taken, writing fully qualified"
                    );
                    qualified.insert(import);
                    continue;
                }
                None => {
                    claims.insert(simple, import.clone());
                }
            }
            let package = ty.package_name().unwrap_or_default();
            if package != JAVA_LANG && package != self.package {
                collector.add_full_name(&import);
            }
        }

        ResolvedNames {
            imports: collector.import_lines(),
            qualified,
        }
    }
}

fn is_runtime_package(package: &str) -> bool {
    RUNTIME_PREFIXES
        .iter()
        .any(|prefix| package.starts_with(prefix))
}
