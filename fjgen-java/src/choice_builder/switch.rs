//! Typed pattern-match chain.
//!
//! `match()` starts at `<Choice>FirstSwitch`. Each binding step returns a
//! state named after the cases still to bind, so a chain only type-checks
//! once every case has an action, and the last step yields the result.
//! Predicate bindings keep the current state since the case may still fall
//! through.

use fjgen_codegen::{builder::Lines, language::JAVA_NAMING};
use fjgen_core::decapitalize;
use fjgen_ir::{Case, ChoiceSpec, Type};

use super::tag_constant;
use crate::{
    ast::{Accessibility, ClassSpec, GenConstructor, GenField, GenMethod},
    runtime,
};

const TARGET: &str = "TARGET";
const VALUE: &str = "$value";
const ACTION: &str = "$action";

fn target() -> Type {
    Type::var(TARGET)
}

pub(super) fn first_switch_type(spec: &ChoiceSpec) -> Type {
    Type::nested(
        &spec.target_package,
        &spec.target_name,
        format!("{}FirstSwitch", spec.target_name),
    )
}

/// The state in which cases `index..` remain unbound.
fn state_type(spec: &ChoiceSpec, index: usize) -> Type {
    let remaining: String = spec.cases[index..]
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    Type::nested(
        &spec.target_package,
        &spec.target_name,
        format!("{}Switch{}", spec.target_name, remaining),
    )
    .with_generics([target()])
}

/// Binding method name for a case: `Accepted` becomes `accepted`.
pub(super) fn binder_name(case: &Case) -> String {
    JAVA_NAMING.safe_name(&decapitalize(&case.name))
}

/// `public ResultStatus.ResultStatusFirstSwitch match()`.
pub(super) fn match_method(spec: &ChoiceSpec) -> GenMethod {
    let first = first_switch_type(spec);
    GenMethod::new(first.clone(), "match").body(format!("return new {}(this);", first))
}

/// Every switch class, first one included.
pub(super) fn switch_classes(spec: &ChoiceSpec) -> Vec<ClassSpec> {
    std::iter::once(first_switch(spec))
        .chain((0..spec.cases.len()).map(|i| typed_switch(spec, i)))
        .collect()
}

fn first_switch(spec: &ChoiceSpec) -> ClassSpec {
    let choice = spec.target_type();
    let first = first_switch_type(spec);
    let mut class = ClassSpec::new(first.clone())
        .static_()
        .field(GenField::new(choice.clone(), VALUE))
        .constructor(
            GenConstructor::new(first.simple_name())
                .accessibility(Accessibility::Private)
                .param("theValue", choice)
                .body(format!("this.{} = theValue;", VALUE)),
        );
    if let Some(case) = spec.cases.first() {
        class = class
            .method(binder(spec, 0, case, false, false))
            .method(binder(spec, 0, case, true, false));
    }
    class
}

fn typed_switch(spec: &ChoiceSpec, index: usize) -> ClassSpec {
    let choice = spec.target_type();
    let state = state_type(spec, index);
    let case = &spec.cases[index];
    ClassSpec::new(state.clone())
        .static_()
        .extends(runtime::choice_type_switch(choice.clone(), target()))
        .constructor(
            GenConstructor::new(state.simple_name())
                .accessibility(Accessibility::Private)
                .param("theValue", choice.clone())
                .param("theAction", runtime::function(choice, target().to_extends()))
                .body("super(theValue, theAction);"),
        )
        .method(binder(spec, index, case, false, true))
        .method(binder(spec, index, case, true, true))
}

/// One binding method for `case` in state `index`.
///
/// `checked` adds a leading predicate parameter; `bound_before` is false only
/// in the first switch, which has no inherited action.
fn binder(spec: &ChoiceSpec, index: usize, case: &Case, checked: bool, bound_before: bool) -> GenMethod {
    let choice = spec.target_type();
    let case_type = spec.case_type(case);
    let action = runtime::function(choice.clone(), target());
    let is_last = index + 1 == spec.cases.len();

    let next = if checked {
        Some(state_type(spec, index))
    } else if is_last {
        None
    } else {
        Some(state_type(spec, index + 1))
    };

    let mut condition = format!("{}.__tag() == {}", VALUE, tag_constant(spec, case));
    if checked {
        condition = format!("{} && check.test(({}){})", condition, case_type, VALUE);
    }
    let adapter = format!(
        "({})(d -> theAction.apply(({})d))",
        action, case_type
    );

    let old_action = if bound_before {
        format!("{} oldAction = ({}){};", action, action, ACTION)
    } else {
        format!("{} oldAction = null;", action)
    };
    let choose = if bound_before {
        Lines::lines([
            format!("    ({} != null)", ACTION),
            "    ? oldAction".to_string(),
            format!("    : ({})", condition),
            format!("        ? {}", adapter),
            "        : oldAction;".to_string(),
        ])
    } else {
        Lines::lines([
            format!("    ({})", condition),
            format!("    ? {}", adapter),
            "    : oldAction;".to_string(),
        ])
    };
    let finish = match &next {
        Some(state) => format!("return new {}({}, newAction);", state, VALUE),
        None => format!("return newAction.apply({});", VALUE),
    };

    let mut method = GenMethod::new(next.unwrap_or_else(target), binder_name(case))
        .annotation("@SuppressWarnings(\"unchecked\")");
    if !bound_before {
        method = method.type_param(target());
    }
    if checked {
        method = method.param("check", runtime::predicate(case_type.to_super()));
    }
    method
        .param(
            "theAction",
            runtime::function(case_type.to_super(), target().to_extends()),
        )
        .body(Lines::of([
            Lines::line(old_action),
            Lines::line(format!("{} newAction =", action)),
            choose,
            Lines::line(finish),
        ]))
}
