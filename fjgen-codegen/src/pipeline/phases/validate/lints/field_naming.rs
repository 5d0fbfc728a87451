//! Lint for member naming conventions.

use fjgen_core::{is_java_identifier, to_camel_case, to_pascal_case};
use fjgen_ir::Declarations;
use fjgen_manifest::is_java_keyword;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on field, parameter and case names that would produce
/// broken or unconventional Java.
///
/// Fields and case parameters must be lowerCamelCase (`make`, `newData`);
/// they become accessor names and derive `withMake`, so a leading capital or
/// an underscore makes the generated API inconsistent. Case names must be
/// PascalCase (`Accepted`), since they name nested classes and factories.
pub struct FieldNamingLint;

impl Lint for FieldNamingLint {
    fn name(&self) -> &'static str {
        "field-naming"
    }

    fn check(&self, ir: &Declarations, diagnostics: &mut Vec<Diagnostic>) {
        for spec in &ir.structs {
            for getter in &spec.getters {
                check_member(
                    "field",
                    &getter.name,
                    &spec.target_name,
                    format!("structs.{}.{}", spec.target_name, getter.name),
                    diagnostics,
                );
            }
        }

        for spec in &ir.choices {
            for case in &spec.cases {
                let case_path = format!("choices.{}.{}", spec.target_name, case.name);
                if !is_pascal_case(&case.name) {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "case '{}' of '{}' should be PascalCase (e.g., '{}')",
                                case.name,
                                spec.target_name,
                                to_pascal_case(&case.name)
                            ),
                        )
                        .at(case_path.clone()),
                    );
                }

                let owner = format!("{}.{}", spec.target_name, case.name);
                for param in &case.params {
                    check_member(
                        "parameter",
                        &param.name,
                        &owner,
                        format!("{}.{}", case_path, param.name),
                        diagnostics,
                    );
                }
            }
        }
    }
}

/// Lowercase ASCII letter first, then letters and digits only.
fn is_lower_camel_case(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

fn check_member(
    kind: &str,
    name: &str,
    owner: &str,
    location: String,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let message = if let Some(reason) = is_java_identifier(name) {
        format!(
            "{} '{}' of '{}' is not a valid Java identifier: {}",
            kind, name, owner, reason
        )
    } else if is_java_keyword(name) {
        format!(
            "{} '{}' of '{}' is a Java reserved keyword",
            kind, name, owner
        )
    } else if !is_lower_camel_case(name) {
        format!(
            "{} '{}' of '{}' should be lowerCamelCase (e.g., '{}')",
            kind,
            name,
            owner,
            to_camel_case(name)
        )
    } else {
        return;
    };
    diagnostics.push(Diagnostic::error("validate", message).at(location));
}

#[cfg(test)]
mod tests {
    use fjgen_ir::{Case, CaseParam, ChoiceSpec, Getter, SourceSpec, Type};

    use super::*;

    fn check(ir: &Declarations) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        FieldNamingLint.check(ir, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_is_lower_camel_case() {
        assert!(is_lower_camel_case("make"));
        assert!(is_lower_camel_case("newData"));
        assert!(is_lower_camel_case("x2"));
        assert!(!is_lower_camel_case("Make"));
        assert!(!is_lower_camel_case("new_data"));
        assert!(!is_lower_camel_case("$data"));
        assert!(!is_lower_camel_case(""));
    }

    #[test]
    fn test_valid_names() {
        let ir = Declarations::new()
            .with_struct(
                SourceSpec::new("com.example", "Car")
                    .getter(Getter::new("make", Type::string()))
                    .getter(Getter::new("modelYear", Type::int())),
            )
            .with_choice(
                ChoiceSpec::new("com.example", "ResultStatus")
                    .case(Case::new("Accepted").param(CaseParam::new("newData", Type::string()))),
            );

        assert!(check(&ir).is_empty());
    }

    #[test]
    fn test_snake_case_field() {
        let ir = Declarations::new().with_struct(
            SourceSpec::new("com.example", "Car").getter(Getter::new("model_year", Type::int())),
        );

        let diagnostics = check(&ir);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert!(diagnostics[0].message.contains("'modelYear'"));
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("structs.Car.model_year")
        );
    }

    #[test]
    fn test_keyword_and_invalid_identifier() {
        let ir = Declarations::new().with_struct(
            SourceSpec::new("com.example", "Car")
                .getter(Getter::new("class", Type::string()))
                .getter(Getter::new("2fast", Type::boolean())),
        );

        let diagnostics = check(&ir);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("reserved keyword"));
        assert!(diagnostics[1].message.contains("cannot start with a digit"));
    }

    #[test]
    fn test_case_and_param_names() {
        let ir = Declarations::new().with_choice(
            ChoiceSpec::new("com.example", "ResultStatus")
                .case(Case::new("accepted").param(CaseParam::new("NewData", Type::string()))),
        );

        let diagnostics = check(&ir);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("should be PascalCase (e.g., 'Accepted')"));
        assert_eq!(
            diagnostics[1].location.as_deref(),
            Some("choices.ResultStatus.accepted.NewData")
        );
    }
}
