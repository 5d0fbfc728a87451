//! Java field declarations.

use fjgen_codegen::builder::{CodeFragment, Renderable};
use fjgen_ir::Type;

use super::{Accessibility, Modifiability, Scope};

/// A field of a generated class.
#[derive(Debug, Clone, PartialEq)]
pub struct GenField {
    pub accessibility: Accessibility,
    pub modifiability: Modifiability,
    pub scope: Scope,
    pub ty: Type,
    pub name: String,
    /// Initializer expression, without the `=`.
    pub value: Option<String>,
    /// Types referenced only from the initializer.
    pub uses: Vec<Type>,
}

impl GenField {
    /// A `private final` instance field.
    pub fn new(ty: Type, name: impl Into<String>) -> Self {
        Self {
            accessibility: Accessibility::Private,
            modifiability: Modifiability::Final,
            scope: Scope::Instance,
            ty,
            name: name.into(),
            value: None,
            uses: Vec::new(),
        }
    }

    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn modifiability(mut self, modifiability: Modifiability) -> Self {
        self.modifiability = modifiability;
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn uses(mut self, ty: Type) -> Self {
        self.uses.push(ty);
        self
    }

    pub fn required_types(&self) -> Vec<Type> {
        let mut types: Vec<Type> = self.ty.walk().into_iter().cloned().collect();
        types.extend(self.uses.iter().flat_map(|t| t.walk()).cloned());
        types
    }

    fn declaration(&self) -> String {
        let head = format!(
            "{}{}{}{} {}",
            self.accessibility.prefix(),
            self.scope.prefix(),
            self.modifiability.prefix(),
            self.ty,
            self.name
        );
        match &self.value {
            Some(value) => format!("{} = {};", head, value),
            None => format!("{};", head),
        }
    }
}

impl Renderable for GenField {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.declaration())]
    }
}
