//! Case factories and per-case views on the choice: `isX`, `asX`, `ifX`.

use fjgen_codegen::builder::Lines;
use fjgen_ir::{Case, ChoiceSpec, Type};

use super::{cases::INSTANCE, tag_constant};
use crate::{
    ast::{GenMethod, Scope},
    runtime,
};

/// `public static ResultStatus.Accepted Accepted(String newData)`.
pub(super) fn factory(spec: &ChoiceSpec, case: &Case) -> GenMethod {
    let case_type = spec.case_type(case);
    let body = if case.has_params() {
        let args: Vec<&str> = case.params.iter().map(|p| p.name.as_str()).collect();
        format!("return new {}({});", case_type, args.join(", "))
    } else {
        format!("return {}.{};", case_type, INSTANCE)
    };
    case.params
        .iter()
        .fold(
            GenMethod::new(case_type.clone(), &case.name).scope(Scope::Static),
            |method, p| method.param(&p.name, p.ty.clone()),
        )
        .body(body)
}

pub(super) fn case_views(spec: &ChoiceSpec, case: &Case) -> Vec<GenMethod> {
    let choice = spec.target_type();
    let case_type = spec.case_type(case);
    let is = format!("is{}", case.name);
    let guard = format!("if ({}())", is);

    let result = runtime::result(case_type.clone());
    let result_class = result.erasure();

    vec![
        GenMethod::new(Type::boolean(), &is)
            .body(format!("return __tag() == {};", tag_constant(spec, case))),
        GenMethod::new(result, format!("as{}", case.name)).body(Lines::of([
            Lines::line(guard.clone()),
            Lines::line(format!(
                "return {}.valueOf(({})this);",
                result_class, case_type
            ))
            .indent(),
            Lines::line(format!("return {}.ofNotExist();", result_class)),
        ])),
        GenMethod::new(choice.clone(), format!("if{}", case.name))
            .param("action", runtime::consumer(case_type.clone()))
            .body(Lines::of([
                Lines::line(guard.clone()),
                Lines::line(format!("action.accept(({})this);", case_type)).indent(),
                Lines::line("return this;"),
            ])),
        GenMethod::new(choice, format!("if{}", case.name))
            .param("action", runtime::runnable())
            .body(Lines::of([
                Lines::line(guard),
                Lines::line("action.run();").indent(),
                Lines::line("return this;"),
            ])),
    ]
}
