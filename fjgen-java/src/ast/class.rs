//! Java class, interface and enum declarations.

use fjgen_codegen::builder::{CodeFragment, Renderable};
use fjgen_ir::Type;

use super::{Accessibility, Concrete, GenConstructor, GenField, GenMethod, Modifiability, Scope};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
}

impl ClassKind {
    fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
        }
    }
}

/// A class-like declaration, top-level or nested.
///
/// `ty` carries the declared name and its type parameters; only the simple
/// name is used in the header, so nested types can be described with their
/// full enclosing path.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
    pub accessibility: Accessibility,
    pub scope: Scope,
    pub modifiability: Modifiability,
    pub concrete: Concrete,
    pub kind: ClassKind,
    pub ty: Type,
    pub extends: Option<Type>,
    /// Implemented interfaces; rendered as `extends` on interfaces.
    pub implements: Vec<Type>,
    pub annotations: Vec<String>,
    pub doc: Option<String>,
    pub constants: Vec<String>,
    pub fields: Vec<GenField>,
    pub constructors: Vec<GenConstructor>,
    pub methods: Vec<GenMethod>,
    pub inner_classes: Vec<ClassSpec>,
    pub uses: Vec<Type>,
}

impl ClassSpec {
    /// A public, non-final class.
    pub fn new(ty: Type) -> Self {
        Self {
            accessibility: Accessibility::Public,
            scope: Scope::Instance,
            modifiability: Modifiability::Modifiable,
            concrete: Concrete::Concrete,
            kind: ClassKind::Class,
            ty,
            extends: None,
            implements: Vec::new(),
            annotations: Vec::new(),
            doc: None,
            constants: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            inner_classes: Vec::new(),
            uses: Vec::new(),
        }
    }

    pub fn interface(ty: Type) -> Self {
        Self {
            kind: ClassKind::Interface,
            ..Self::new(ty)
        }
    }

    pub fn enumeration(ty: Type) -> Self {
        Self {
            kind: ClassKind::Enum,
            ..Self::new(ty)
        }
    }

    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn static_(mut self) -> Self {
        self.scope = Scope::Static;
        self
    }

    pub fn final_(mut self) -> Self {
        self.modifiability = Modifiability::Final;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.concrete = Concrete::Abstract;
        self
    }

    pub fn extends(mut self, ty: Type) -> Self {
        self.extends = Some(ty);
        self
    }

    pub fn implements(mut self, ty: Type) -> Self {
        self.implements.push(ty);
        self
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn constant(mut self, name: impl Into<String>) -> Self {
        self.constants.push(name.into());
        self
    }

    pub fn field(mut self, field: GenField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = GenField>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Add a constructor unless one with the same erased signature exists.
    pub fn constructor(mut self, constructor: GenConstructor) -> Self {
        let signature = constructor.signature();
        if self.constructors.iter().any(|c| c.signature() == signature) {
            tracing::trace!(class = %self.ty.simple_name(), "skipping duplicate constructor");
        } else {
            self.constructors.push(constructor);
        }
        self
    }

    pub fn method(mut self, method: GenMethod) -> Self {
        self.methods.push(method);
        self
    }

    pub fn methods(mut self, methods: impl IntoIterator<Item = GenMethod>) -> Self {
        self.methods.extend(methods);
        self
    }

    pub fn inner_class(mut self, class: ClassSpec) -> Self {
        self.inner_classes.push(class);
        self
    }

    pub fn uses(mut self, ty: Type) -> Self {
        self.uses.push(ty);
        self
    }

    pub fn name(&self) -> &str {
        self.ty.simple_name()
    }

    pub fn find_method(&self, name: &str) -> Option<&GenMethod> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn find_inner_class(&self, name: &str) -> Option<&ClassSpec> {
        self.inner_classes.iter().find(|c| c.name() == name)
    }

    /// Simple names of every class declared inside this one, at any depth.
    ///
    /// These shadow same-named imports anywhere in the file.
    pub fn nested_names(&self) -> Vec<String> {
        self.inner_classes
            .iter()
            .flat_map(|inner| {
                std::iter::once(inner.name().to_string()).chain(inner.nested_names())
            })
            .collect()
    }

    /// Every type referenced by this declaration, nested members included.
    pub fn required_types(&self) -> Vec<Type> {
        let mut types: Vec<Type> = self
            .extends
            .iter()
            .chain(&self.implements)
            .chain(&self.uses)
            .flat_map(Type::walk)
            .cloned()
            .collect();
        types.extend(self.fields.iter().flat_map(GenField::required_types));
        types.extend(
            self.constructors
                .iter()
                .flat_map(GenConstructor::required_types),
        );
        types.extend(self.methods.iter().flat_map(GenMethod::required_types));
        types.extend(
            self.inner_classes
                .iter()
                .flat_map(ClassSpec::required_types),
        );
        types
    }

    fn header(&self) -> String {
        let mut header = format!(
            "{}{}{}{}{} {}",
            self.accessibility.prefix(),
            self.scope.prefix(),
            self.concrete.prefix(),
            self.modifiability.prefix(),
            self.kind.keyword(),
            self.ty.simple_name()
        );
        if !self.ty.generics().is_empty() {
            let params: Vec<String> = self.ty.generics().iter().map(ToString::to_string).collect();
            header.push_str(&format!("<{}>", params.join(", ")));
        }
        if let Some(extends) = &self.extends {
            header.push_str(&format!(" extends {}", extends));
        }
        if !self.implements.is_empty() {
            let keyword = match self.kind {
                ClassKind::Interface => "extends",
                _ => "implements",
            };
            let names: Vec<String> = self.implements.iter().map(ToString::to_string).collect();
            header.push_str(&format!(" {} {}", keyword, names.join(", ")));
        }
        header.push_str(" {");
        header
    }

    fn body(&self) -> Vec<CodeFragment> {
        let mut sections: Vec<Vec<CodeFragment>> = Vec::new();

        if !self.constants.is_empty() {
            let last = self.constants.len() - 1;
            sections.push(
                self.constants
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        let end = if i == last { ";" } else { "," };
                        CodeFragment::Line(format!("{}{}", name, end))
                    })
                    .collect(),
            );
        }
        if !self.fields.is_empty() {
            sections.push(self.fields.as_slice().to_fragments());
        }

        let members = self
            .constructors
            .iter()
            .map(Renderable::to_fragments)
            .chain(self.methods.iter().map(Renderable::to_fragments))
            .chain(self.inner_classes.iter().map(Renderable::to_fragments))
            .filter(|fragments| !fragments.is_empty());
        sections.extend(members);

        let mut body = Vec::new();
        for (i, section) in sections.into_iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(section);
        }
        body
    }
}

impl Renderable for ClassSpec {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JavaDoc(doc.clone()));
        }
        for annotation in &self.annotations {
            fragments.push(CodeFragment::Line(annotation.clone()));
        }
        fragments.push(CodeFragment::Block {
            header: self.header(),
            body: self.body(),
            close: Some("}".to_string()),
        });
        fragments
    }
}
