//! Lint for declarations without members.

use fjgen_ir::Declarations;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint for choices without cases (error) and structs without fields (warning).
///
/// A choice with no cases cannot be instantiated. An empty struct is legal
/// Java but usually a declaration mistake.
pub struct EmptyDeclarationLint;

impl Lint for EmptyDeclarationLint {
    fn name(&self) -> &'static str {
        "empty-declaration"
    }

    fn check(&self, ir: &Declarations, diagnostics: &mut Vec<Diagnostic>) {
        for spec in ir.choices.iter().filter(|c| c.cases.is_empty()) {
            diagnostics.push(
                Diagnostic::error(
                    "validate",
                    format!("choice '{}' declares no cases", spec.target_name),
                )
                .at(format!("choices.{}", spec.target_name)),
            );
        }
        for spec in ir.structs.iter().filter(|s| s.getters.is_empty()) {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!("struct '{}' has no fields", spec.target_name),
                )
                .at(format!("structs.{}", spec.target_name)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use fjgen_ir::{Case, ChoiceSpec, SourceSpec};

    use super::*;

    #[test]
    fn test_empty_choice_is_error() {
        let ir = Declarations::new()
            .with_choice(ChoiceSpec::new("com.example", "Nothing"))
            .with_choice(ChoiceSpec::new("com.example", "Light").case(Case::new("On")));

        let mut diagnostics = Vec::new();
        EmptyDeclarationLint.check(&ir, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert!(diagnostics[0].message.contains("Nothing"));
    }

    #[test]
    fn test_empty_struct_is_warning() {
        let ir = Declarations::new().with_struct(SourceSpec::new("com.example", "Marker"));

        let mut diagnostics = Vec::new();
        EmptyDeclarationLint.check(&ir, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(!diagnostics[0].severity.is_error());
        assert_eq!(diagnostics[0].location.as_deref(), Some("structs.Marker"));
    }
}
