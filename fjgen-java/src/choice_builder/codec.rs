//! Choice-level map codec. The `__tagged` key selects the case.

use fjgen_codegen::builder::Lines;
use fjgen_core::java_string_literal;
use fjgen_ir::{ChoiceSpec, Type};

use crate::{
    ast::{GenMethod, Scope},
    runtime,
    schema::MAP,
};

fn choice_schema_type() -> Type {
    runtime::map(
        Type::string(),
        runtime::map(Type::string(), runtime::case_param()),
    )
}

pub(super) fn codec_methods(spec: &ChoiceSpec) -> Vec<GenMethod> {
    vec![from_map(spec), get_schema(), choice_schema(spec)]
}

fn from_map(spec: &ChoiceSpec) -> GenMethod {
    let dispatch = spec.cases.iter().map(|case| {
        Lines::of([
            Lines::line(format!(
                "if ({}.equals($tag))",
                java_string_literal(&case.name)
            )),
            Lines::line(format!(
                "return {}.caseFromMap({});",
                spec.case_type(case),
                MAP
            ))
            .indent(),
        ])
    });
    GenMethod::new(spec.target_type(), "fromMap")
        .scope(Scope::Static)
        .param(MAP, runtime::map(Type::string(), Type::object().to_extends()))
        .body(Lines::of([
            Lines::line(format!("Object $tag = {}.get(\"__tagged\");", MAP)),
            Lines::of(dispatch.collect::<Vec<_>>()),
            Lines::line(format!(
                "throw new IllegalArgumentException(\"Tagged value does not represent a case of {}: \" + {});",
                spec.target_name, MAP
            )),
        ]))
}

fn get_schema() -> GenMethod {
    GenMethod::new(choice_schema_type(), "__getSchema").body("return getChoiceSchema();")
}

fn choice_schema(spec: &ChoiceSpec) -> GenMethod {
    let schema_type = choice_schema_type();
    GenMethod::new(schema_type.clone(), "getChoiceSchema")
        .scope(Scope::Static)
        .body(Lines::of([
            Lines::line(format!("{} {} = new java.util.HashMap<>();", schema_type, MAP)),
            Lines::lines(spec.cases.iter().map(|case| {
                format!(
                    "{}.put({}, {}.getCaseSchema());",
                    MAP,
                    java_string_literal(&case.name),
                    spec.case_type(case)
                )
            })),
            Lines::line(format!("return {};", MAP)),
        ]))
}
