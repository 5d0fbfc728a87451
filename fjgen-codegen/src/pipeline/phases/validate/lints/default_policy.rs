//! Lint for default-value policies.

use fjgen_ir::{Declarations, SpecError};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on default-value policies the generator cannot honor.
///
/// A default is only allowed on nullable members and must fit the member's
/// type (`NULL` needs a reference type, `ZERO`/`MINUS_ONE` a numeric one,
/// `EMPTY` a string, collection or optional). Structs asking for a no-arg
/// constructor additionally need a default for every field.
pub struct DefaultPolicyLint;

impl Lint for DefaultPolicyLint {
    fn name(&self) -> &'static str {
        "default-policy"
    }

    fn check(&self, ir: &Declarations, diagnostics: &mut Vec<Diagnostic>) {
        for spec in &ir.structs {
            let path = format!("structs.{}", spec.target_name);
            for getter in &spec.getters {
                if let Err(e) = getter.validate(&spec.target_name) {
                    push(diagnostics, e, format!("{}.{}", path, getter.name));
                }
            }

            if spec.config.no_arg_constructor {
                for getter in spec.getters.iter().filter(|g| g.resolved_default().is_none()) {
                    let error = SpecError::NoDefaultForRequired {
                        spec: spec.target_name.clone(),
                        field: getter.name.clone(),
                        ty: getter.ty.to_string(),
                    };
                    push(diagnostics, error, format!("{}.{}", path, getter.name));
                }
            }
        }

        for spec in &ir.choices {
            for case in &spec.cases {
                let owner = format!("{}.{}", spec.target_name, case.name);
                for param in &case.params {
                    if let Err(e) = param.as_getter().validate(&owner) {
                        push(
                            diagnostics,
                            e,
                            format!("choices.{}.{}", owner, param.name),
                        );
                    }
                }
            }
        }
    }
}

fn push(diagnostics: &mut Vec<Diagnostic>, error: SpecError, location: String) {
    diagnostics.push(Diagnostic::error("validate", error.to_string()).at(location));
}
