//! Lint for duplicate name detection.

use std::collections::HashMap;

use fjgen_ir::Declarations;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on names declared more than once.
///
/// Covers fields within a struct, cases within a choice, parameters within a
/// case, cases named after their choice or after a nested type the choice
/// generates, and generated types sharing a full name (they would be written
/// to the same file).
pub struct DuplicateNameLint;

impl Lint for DuplicateNameLint {
    fn name(&self) -> &'static str {
        "duplicate-name"
    }

    fn check(&self, ir: &Declarations, diagnostics: &mut Vec<Diagnostic>) {
        check_type_names(ir, diagnostics);

        for spec in &ir.structs {
            check_unique(
                spec.getters.iter().map(|g| g.name.as_str()),
                "field",
                &spec.target_name,
                &format!("structs.{}", spec.target_name),
                diagnostics,
            );
        }

        for spec in &ir.choices {
            let path = format!("choices.{}", spec.target_name);
            check_unique(
                spec.cases.iter().map(|c| c.name.as_str()),
                "case",
                &spec.target_name,
                &path,
                diagnostics,
            );

            for case in &spec.cases {
                if case.name == spec.target_name {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "case '{}' has the same name as its choice '{}'",
                                case.name, spec.target_name
                            ),
                        )
                        .at(format!("{}.{}", path, case.name)),
                    );
                }
                if let Some(reserved) = spec.reserved_name(&case.name) {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "case '{}' of '{}' clashes with the generated nested type '{}'",
                                case.name, spec.target_name, reserved
                            ),
                        )
                        .at(format!("{}.{}", path, case.name)),
                    );
                }
                check_unique(
                    case.params.iter().map(|p| p.name.as_str()),
                    "parameter",
                    &format!("{}.{}", spec.target_name, case.name),
                    &format!("{}.{}", path, case.name),
                    diagnostics,
                );
            }
        }
    }
}

/// Report every name after its first occurrence.
fn check_unique<'a>(
    names: impl Iterator<Item = &'a str>,
    kind: &str,
    owner: &str,
    path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for name in names {
        let count = seen.entry(name).or_default();
        *count += 1;
        if *count == 2 {
            diagnostics.push(
                Diagnostic::error(
                    "validate",
                    format!("{} '{}' is declared more than once in '{}'", kind, name, owner),
                )
                .at(format!("{}.{}", path, name)),
            );
        }
    }
}

fn check_type_names(ir: &Declarations, diagnostics: &mut Vec<Diagnostic>) {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let declared = ir
        .structs
        .iter()
        .map(|s| (s.target_type().full_name(), "struct"))
        .chain(
            ir.choices
                .iter()
                .map(|c| (c.target_type().full_name(), "choice")),
        );

    for (full_name, kind) in declared {
        if let Some(first) = seen.get(&full_name) {
            diagnostics.push(Diagnostic::error(
                "validate",
                format!(
                    "{} '{}' conflicts with {} of the same name",
                    kind, full_name, first
                ),
            ));
        } else {
            seen.insert(full_name, kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use fjgen_ir::{Case, CaseParam, ChoiceSpec, Getter, SourceSpec, Type};

    use super::*;

    fn check(ir: &Declarations) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        DuplicateNameLint.check(ir, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_no_duplicates() {
        let ir = Declarations::new()
            .with_struct(
                SourceSpec::new("com.example", "Car")
                    .getter(Getter::new("make", Type::string()))
                    .getter(Getter::new("year", Type::int())),
            )
            .with_choice(
                ChoiceSpec::new("com.example", "Light")
                    .case(Case::new("On"))
                    .case(Case::new("Off")),
            );

        assert!(check(&ir).is_empty());
    }

    #[test]
    fn test_duplicate_field_reported_once() {
        let ir = Declarations::new().with_struct(
            SourceSpec::new("com.example", "Car")
                .getter(Getter::new("make", Type::string()))
                .getter(Getter::new("make", Type::string()))
                .getter(Getter::new("make", Type::string())),
        );

        let diagnostics = check(&ir);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "field 'make' is declared more than once in 'Car'"
        );
    }

    #[test]
    fn test_duplicate_cases_and_params() {
        let ir = Declarations::new().with_choice(
            ChoiceSpec::new("com.example", "Shape")
                .case(
                    Case::new("Circle")
                        .param(CaseParam::new("radius", Type::double()))
                        .param(CaseParam::new("radius", Type::double())),
                )
                .case(Case::new("Circle"))
                .case(Case::new("Shape")),
        );

        let diagnostics = check(&ir);
        let messages: Vec<&str> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages.len(), 3);
        assert!(messages.contains(&"case 'Circle' is declared more than once in 'Shape'"));
        assert!(messages.contains(&"parameter 'radius' is declared more than once in 'Shape.Circle'"));
        assert!(messages.contains(&"case 'Shape' has the same name as its choice 'Shape'"));
    }

    #[test]
    fn test_cases_named_after_generated_types() {
        let ir = Declarations::new().with_choice(
            ChoiceSpec::new("com.example", "Shape")
                .case(Case::new("Tag"))
                .case(Case::new("ShapeLens"))
                .case(Case::new("ShapeFirstSwitch"))
                .case(Case::new("ShapeSwitchTag"))
                .case(Case::new("Square")),
        );

        let diagnostics = check(&ir);
        let paths: Vec<&str> = diagnostics
            .iter()
            .filter_map(|d| d.location.as_deref())
            .collect();
        assert_eq!(
            paths,
            vec![
                "choices.Shape.Tag",
                "choices.Shape.ShapeLens",
                "choices.Shape.ShapeFirstSwitch",
                "choices.Shape.ShapeSwitchTag",
            ]
        );
        assert_eq!(
            diagnostics[3].message,
            "case 'ShapeSwitchTag' of 'Shape' clashes with the generated nested type 'ShapeSwitch...'"
        );
    }

    #[test]
    fn test_same_package_type_conflict() {
        let ir = Declarations::new()
            .with_struct(SourceSpec::new("com.example", "Status"))
            .with_choice(ChoiceSpec::new("com.example", "Status").case(Case::new("Ok")))
            .with_struct(SourceSpec::new("com.other", "Status"));

        let diagnostics = check(&ir);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("com.example.Status"));
    }
}
