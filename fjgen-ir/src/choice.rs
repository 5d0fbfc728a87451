//! Sum-type generation requests.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{DefaultValue, Getter, SpecError, Type};

/// One parameter of a choice case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseParam {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub default_value: DefaultValue,
}

impl CaseParam {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: false,
            default_value: DefaultValue::Required,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_default(mut self, default_value: DefaultValue) -> Self {
        self.default_value = default_value;
        self
    }

    /// View the parameter as a struct field; both share the same rules.
    pub fn as_getter(&self) -> Getter {
        Getter {
            name: self.name.clone(),
            ty: self.ty.clone(),
            nullable: self.nullable,
            default_value: self.default_value.clone(),
        }
    }
}

/// One named alternative of a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub name: String,
    #[serde(default)]
    pub params: Vec<CaseParam>,
}

impl Case {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, param: CaseParam) -> Self {
        self.params.push(param);
        self
    }

    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }
}

/// The request to generate one choice (closed sum type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSpec {
    pub spec_name: String,
    pub spec_package: String,
    pub target_name: String,
    pub target_package: String,
    #[serde(default = "default_true")]
    pub generate_lens: bool,
    pub cases: Vec<Case>,
    #[serde(default)]
    pub types_with_lens: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl ChoiceSpec {
    /// A choice `target_name` in `package`, declared by `<target_name>Spec`.
    pub fn new(package: impl Into<String>, target_name: impl Into<String>) -> Self {
        let package = package.into();
        let target_name = target_name.into();
        Self {
            spec_name: format!("{}Spec", target_name),
            spec_package: package.clone(),
            target_name,
            target_package: package,
            generate_lens: true,
            cases: Vec::new(),
            types_with_lens: Vec::new(),
        }
    }

    pub fn spec(mut self, package: impl Into<String>, name: impl Into<String>) -> Self {
        self.spec_package = package.into();
        self.spec_name = name.into();
        self
    }

    pub fn case(mut self, case: Case) -> Self {
        self.cases.push(case);
        self
    }

    pub fn generate_lens(mut self, generate_lens: bool) -> Self {
        self.generate_lens = generate_lens;
        self
    }

    pub fn type_with_lens(mut self, full_name: impl Into<String>) -> Self {
        self.types_with_lens.push(full_name.into());
        self
    }

    pub fn target_type(&self) -> Type {
        Type::new(&self.target_package, &self.target_name)
    }

    pub fn spec_type(&self) -> Type {
        Type::of(&format!("{}.{}", self.spec_package, self.spec_name))
    }

    /// The nested class generated for `case`.
    pub fn case_type(&self, case: &Case) -> Type {
        Type::nested(&self.target_package, &self.target_name, &case.name)
    }

    pub fn has_lens(&self, ty: &Type) -> bool {
        let full_name = ty.erasure().full_name();
        full_name == self.target_type().full_name()
            || self.types_with_lens.iter().any(|name| *name == full_name)
    }

    /// The generated nested type a case named `name` would collide with.
    ///
    /// The choice class declares `Tag`, `<Choice>Lens`, `<Choice>FirstSwitch`
    /// and one `<Choice>Switch<Cases...>` per binding state.
    pub fn reserved_name(&self, name: &str) -> Option<String> {
        let choice = &self.target_name;
        let switch_prefix = format!("{}Switch", choice);
        let fixed = ["Tag".to_string(), format!("{}Lens", choice), format!("{}FirstSwitch", choice)];
        if fixed.iter().any(|reserved| reserved == name) {
            Some(name.to_string())
        } else if name.starts_with(&switch_prefix) {
            Some(format!("{}...", switch_prefix))
        } else {
            None
        }
    }

    /// Reject inconsistent requests before anything is emitted.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.cases.is_empty() {
            return Err(SpecError::EmptyChoice {
                spec: self.target_name.clone(),
            });
        }

        let mut names = HashSet::new();
        for case in &self.cases {
            if case.name == self.target_name {
                return Err(SpecError::CaseNamedAfterChoice {
                    spec: self.target_name.clone(),
                    case: case.name.clone(),
                });
            }
            if let Some(reserved) = self.reserved_name(&case.name) {
                return Err(SpecError::ReservedCaseName {
                    spec: self.target_name.clone(),
                    case: case.name.clone(),
                    reserved,
                });
            }
            if !names.insert(case.name.as_str()) {
                return Err(SpecError::DuplicateCase {
                    spec: self.target_name.clone(),
                    case: case.name.clone(),
                });
            }

            let owner = format!("{}.{}", self.target_name, case.name);
            let mut params = HashSet::new();
            for param in &case.params {
                if !params.insert(param.name.as_str()) {
                    return Err(SpecError::DuplicateField {
                        spec: owner,
                        field: param.name.clone(),
                    });
                }
                param.as_getter().validate(&owner)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_status() -> ChoiceSpec {
        ChoiceSpec::new("com.example", "ResultStatus")
            .case(Case::new("Accepted").param(CaseParam::new("newData", Type::string())))
            .case(
                Case::new("Failed")
                    .param(CaseParam::new("problem", Type::of("java.lang.Exception"))),
            )
    }

    #[test]
    fn test_case_type_is_nested() {
        let spec = result_status();
        let accepted = spec.case_type(&spec.cases[0]);
        assert_eq!(accepted.to_string(), "ResultStatus.Accepted");
        assert_eq!(
            accepted.import_name().as_deref(),
            Some("com.example.ResultStatus")
        );
    }

    #[test]
    fn test_validate_ok() {
        assert!(result_status().validate().is_ok());
        assert_eq!(result_status().spec_name, "ResultStatusSpec");
    }

    #[test]
    fn test_validate_empty() {
        let spec = ChoiceSpec::new("com.example", "Nothing");
        assert_eq!(
            spec.validate(),
            Err(SpecError::EmptyChoice {
                spec: "Nothing".into()
            })
        );
    }

    #[test]
    fn test_validate_duplicate_case() {
        let spec = result_status().case(Case::new("Accepted"));
        assert!(matches!(
            spec.validate(),
            Err(SpecError::DuplicateCase { ref case, .. }) if case == "Accepted"
        ));
    }

    #[test]
    fn test_validate_case_named_after_choice() {
        let spec = result_status().case(Case::new("ResultStatus"));
        assert!(matches!(
            spec.validate(),
            Err(SpecError::CaseNamedAfterChoice { .. })
        ));
    }

    fn reserved_case(case: &str) -> Option<String> {
        match result_status().case(Case::new(case)).validate() {
            Err(SpecError::ReservedCaseName { reserved, .. }) => Some(reserved),
            _ => None,
        }
    }

    #[test]
    fn test_validate_case_named_tag() {
        assert_eq!(reserved_case("Tag").as_deref(), Some("Tag"));
    }

    #[test]
    fn test_validate_case_named_like_lens() {
        assert_eq!(
            reserved_case("ResultStatusLens").as_deref(),
            Some("ResultStatusLens")
        );
    }

    #[test]
    fn test_validate_case_named_like_first_switch() {
        assert_eq!(
            reserved_case("ResultStatusFirstSwitch").as_deref(),
            Some("ResultStatusFirstSwitch")
        );
    }

    #[test]
    fn test_validate_case_named_like_switch_state() {
        assert_eq!(
            reserved_case("ResultStatusSwitchFailed").as_deref(),
            Some("ResultStatusSwitch...")
        );
        assert_eq!(
            reserved_case("ResultStatusSwitch").as_deref(),
            Some("ResultStatusSwitch...")
        );
    }

    #[test]
    fn test_validate_names_close_to_reserved_are_fine() {
        for case in ["Tagged", "Lens", "FirstSwitch", "StatusSwitch"] {
            assert_eq!(reserved_case(case), None, "{case}");
            assert!(result_status().case(Case::new(case)).validate().is_ok());
        }
    }

    #[test]
    fn test_validate_reserved_error_message() {
        let err = result_status()
            .case(Case::new("Tag"))
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "case 'Tag' of 'ResultStatus' clashes with the generated nested type 'Tag'"
        );
        assert_eq!(err.spec(), "ResultStatus");
    }

    #[test]
    fn test_validate_param_default_names_case() {
        let spec = ChoiceSpec::new("com.example", "Shape").case(
            Case::new("Circle")
                .param(CaseParam::new("radius", Type::double()).with_default(DefaultValue::Zero)),
        );
        let err = spec.validate().unwrap_err();
        assert_eq!(err.spec(), "Shape.Circle");
    }
}
