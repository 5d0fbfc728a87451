//! Java method declarations.

use fjgen_codegen::builder::{CodeFragment, Lines, Renderable};
use fjgen_ir::Type;

use super::{Accessibility, Concrete, Modifiability, Scope};

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct GenParam {
    pub name: String,
    pub ty: Type,
}

impl GenParam {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    pub(crate) fn declaration(&self) -> String {
        format!("{} {}", self.ty, self.name)
    }
}

/// Render a parameter list without the parentheses.
pub(crate) fn param_list(params: &[GenParam]) -> String {
    params
        .iter()
        .map(GenParam::declaration)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A method of a generated class or interface.
///
/// A method without a body renders as a declaration ending in `;`, which is
/// what both abstract methods and plain interface methods need.
#[derive(Debug, Clone, PartialEq)]
pub struct GenMethod {
    pub accessibility: Accessibility,
    pub scope: Scope,
    pub modifiability: Modifiability,
    pub concrete: Concrete,
    /// Method type parameters, e.g. `<TARGET>`.
    pub type_params: Vec<Type>,
    pub return_type: Type,
    pub name: String,
    pub params: Vec<GenParam>,
    pub throws: Vec<Type>,
    pub annotations: Vec<String>,
    pub doc: Option<String>,
    pub body: Option<Lines>,
    /// Types referenced only from the body.
    pub uses: Vec<Type>,
}

impl GenMethod {
    /// A public, non-final instance method without a body.
    pub fn new(return_type: Type, name: impl Into<String>) -> Self {
        Self {
            accessibility: Accessibility::Public,
            scope: Scope::Instance,
            modifiability: Modifiability::Modifiable,
            concrete: Concrete::Concrete,
            type_params: Vec::new(),
            return_type,
            name: name.into(),
            params: Vec::new(),
            throws: Vec::new(),
            annotations: Vec::new(),
            doc: None,
            body: None,
            uses: Vec::new(),
        }
    }

    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn final_(mut self) -> Self {
        self.modifiability = Modifiability::Final;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.concrete = Concrete::Abstract;
        self.body = None;
        self
    }

    pub fn type_param(mut self, ty: Type) -> Self {
        self.type_params.push(ty);
        self
    }

    pub fn param(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.params.push(GenParam::new(name, ty));
        self
    }

    pub fn throws(mut self, ty: Type) -> Self {
        self.throws.push(ty);
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

    pub fn body(mut self, body: impl Into<Lines>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn uses(mut self, ty: Type) -> Self {
        self.uses.push(ty);
        self
    }

    /// Parameter types after erasure, used to detect clashing overloads.
    pub fn signature(&self) -> (String, Vec<Type>) {
        (
            self.name.clone(),
            self.params.iter().map(|p| p.ty.erasure()).collect(),
        )
    }

    pub fn required_types(&self) -> Vec<Type> {
        std::iter::once(&self.return_type)
            .chain(self.params.iter().map(|p| &p.ty))
            .chain(&self.throws)
            .chain(&self.uses)
            .flat_map(Type::walk)
            .cloned()
            .collect()
    }

    fn header(&self) -> String {
        let type_params = if self.type_params.is_empty() {
            String::new()
        } else {
            let names: Vec<String> = self.type_params.iter().map(ToString::to_string).collect();
            format!("<{}> ", names.join(", "))
        };
        let throws = if self.throws.is_empty() {
            String::new()
        } else {
            let names: Vec<String> = self.throws.iter().map(ToString::to_string).collect();
            format!(" throws {}", names.join(", "))
        };
        format!(
            "{}{}{}{}{}{} {}({}){}",
            self.accessibility.prefix(),
            self.scope.prefix(),
            self.concrete.prefix(),
            self.modifiability.prefix(),
            type_params,
            self.return_type,
            self.name,
            param_list(&self.params),
            throws
        )
    }
}

impl Renderable for GenMethod {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JavaDoc(doc.clone()));
        }
        for annotation in &self.annotations {
            fragments.push(CodeFragment::Line(annotation.clone()));
        }
        match &self.body {
            Some(body) => fragments.push(CodeFragment::Block {
                header: format!("{} {{", self.header()),
                body: body.to_fragments(),
                close: Some("}".to_string()),
            }),
            None => fragments.push(CodeFragment::Line(format!("{};", self.header()))),
        }
        fragments
    }
}
