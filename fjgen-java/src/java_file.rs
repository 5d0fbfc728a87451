//! JavaFile abstraction: one compilation unit per generated type.

use std::path::{Path, PathBuf};

use fjgen_codegen::{
    builder::{CodeBuilder, CodeFragment, Renderable},
    language::JAVA_NAMING,
};
use fjgen_core::GeneratedFile;

/// A Java source file: package clause, imports, and a body.
#[derive(Default)]
pub struct JavaFile {
    package: String,
    name: String,
    imports: Vec<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl JavaFile {
    /// `name` is the simple name of the top-level type, which names the file.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add rendered `import` lines.
    pub fn imports(mut self, imports: impl IntoIterator<Item = String>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a top-level declaration.
    pub fn body<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Path of this file relative to a source root, e.g. `com/example/Car.java`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        if !self.package.is_empty() {
            path.push(JAVA_NAMING.package_path(&self.package));
        }
        path.push(JAVA_NAMING.file_name(&self.name));
        path
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::java();
        if !self.package.is_empty() {
            builder.push_line(&format!("package {};", self.package));
            builder.push_blank();
        }
        if !self.imports.is_empty() {
            for import in &self.imports {
                builder.push_line(import);
            }
            builder.push_blank();
        }
        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }
        builder.build()
    }
}

impl GeneratedFile for JavaFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> String {
        JavaFile::render(self)
    }
}
