//! Import collection utilities.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Maintains package insertion order; symbols within a package are sorted.
/// [`ImportCollector::import_lines`] gives the fully sorted Java form.
///
/// # Example
///
/// ```
/// use fjgen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("java.util", "Map");
/// imports.add("functionalj.list", "FuncList");
/// imports.add_full_name("java.util.List");
///
/// assert_eq!(
///     imports.import_lines(),
///     vec![
///         "import functionalj.list.FuncList;",
///         "import java.util.List;",
///         "import java.util.Map;",
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Package -> set of symbols (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a package.
    pub fn add(&mut self, package: &str, symbol: &str) {
        self.imports
            .entry(package.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add a fully qualified class name such as `java.util.List`.
    ///
    /// Names without a package are ignored.
    pub fn add_full_name(&mut self, full_name: &str) {
        if let Some((package, symbol)) = full_name.rsplit_once('.') {
            self.add(package, symbol);
        }
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for (package, symbols) in &other.imports {
            let entry = self.imports.entry(package.clone()).or_default();
            entry.extend(symbols.iter().cloned());
        }
    }

    /// Drop every symbol imported from `package`.
    pub fn remove_package(&mut self, package: &str) {
        self.imports.shift_remove(package);
    }

    pub fn has_package(&self, package: &str) -> bool {
        self.imports.contains_key(package)
    }

    pub fn has_symbol(&self, package: &str, symbol: &str) -> bool {
        self.imports
            .get(package)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `import a.b.C;` lines, sorted by full name and de-duplicated.
    pub fn import_lines(&self) -> Vec<String> {
        let names: BTreeSet<String> = self
            .imports
            .iter()
            .flat_map(|(package, symbols)| {
                symbols
                    .iter()
                    .map(move |symbol| format!("{}.{}", package, symbol))
            })
            .collect();
        names
            .into_iter()
            .map(|name| format!("import {};", name))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.values().all(BTreeSet::is_empty)
    }

    /// Number of distinct packages.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add("java.util", "List");
        imports.add("java.util", "Map");
        imports.add("functionalj.result", "Result");

        assert!(imports.has_package("java.util"));
        assert!(imports.has_symbol("java.util", "List"));
        assert!(!imports.has_symbol("java.util", "Set"));
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_import_collector_merge() {
        let mut a = ImportCollector::new();
        a.add("java.util", "List");

        let mut b = ImportCollector::new();
        b.add("java.util", "Map");
        b.add("java.util.function", "Supplier");

        a.merge(&b);

        assert!(a.has_symbol("java.util", "List"));
        assert!(a.has_symbol("java.util", "Map"));
        assert!(a.has_package("java.util.function"));
    }

    #[test]
    fn test_import_lines_deduplicated_and_sorted() {
        let mut imports = ImportCollector::new();
        imports.add_full_name("java.util.function.Supplier");
        imports.add_full_name("java.util.Map");
        imports.add_full_name("java.util.Map");
        imports.add_full_name("T");

        assert_eq!(
            imports.import_lines(),
            vec!["import java.util.Map;", "import java.util.function.Supplier;"]
        );
    }

    #[test]
    fn test_remove_package() {
        let mut imports = ImportCollector::new();
        imports.add("com.example", "CarDef");
        imports.add("java.util", "Map");
        imports.remove_package("com.example");

        assert!(!imports.has_package("com.example"));
        assert_eq!(imports.import_lines(), vec!["import java.util.Map;"]);
        assert!(!imports.is_empty());
    }
}
