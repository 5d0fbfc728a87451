//! Java constructor declarations.

use fjgen_codegen::builder::{CodeFragment, Lines, Renderable};
use fjgen_ir::Type;

use super::{Accessibility, GenParam, method::param_list};

#[derive(Debug, Clone, PartialEq)]
pub struct GenConstructor {
    pub accessibility: Accessibility,
    /// Simple name of the declaring class.
    pub name: String,
    pub params: Vec<GenParam>,
    pub body: Lines,
    pub uses: Vec<Type>,
}

impl GenConstructor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            accessibility: Accessibility::Public,
            name: name.into(),
            params: Vec::new(),
            body: Lines::empty(),
            uses: Vec::new(),
        }
    }

    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn param(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.params.push(GenParam::new(name, ty));
        self
    }

    pub fn body(mut self, body: impl Into<Lines>) -> Self {
        self.body = body.into();
        self
    }

    pub fn uses(mut self, ty: Type) -> Self {
        self.uses.push(ty);
        self
    }

    /// Erased parameter types; two constructors with the same signature clash.
    pub fn signature(&self) -> Vec<Type> {
        self.params.iter().map(|p| p.ty.erasure()).collect()
    }

    pub fn required_types(&self) -> Vec<Type> {
        self.params
            .iter()
            .map(|p| &p.ty)
            .chain(&self.uses)
            .flat_map(Type::walk)
            .cloned()
            .collect()
    }
}

impl Renderable for GenConstructor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Block {
            header: format!(
                "{}{}({}) {{",
                self.accessibility.prefix(),
                self.name,
                param_list(&self.params)
            ),
            body: self.body.to_fragments(),
            close: Some("}".to_string()),
        }]
    }
}
