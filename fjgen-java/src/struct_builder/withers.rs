//! `with<Field>` copy methods.
//!
//! Every field gets four overloads: a plain value, a `Supplier`, a
//! `Function` of the current value, and a `BiFunction` of the whole object
//! and the current value. Each one calls the all-args constructor with only
//! that field replaced.

use fjgen_core::capitalize;
use fjgen_ir::{Getter, SourceSpec, Type};

use crate::{ast::GenMethod, runtime};

/// Constructor arguments with `name` replaced by `replacement`.
pub(crate) fn copy_args<'a>(
    names: impl IntoIterator<Item = &'a str>,
    name: &str,
    replacement: &str,
) -> String {
    names
        .into_iter()
        .map(|n| {
            if n == name {
                replacement.to_string()
            } else {
                format!("this.{}", n)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub(super) fn withers(spec: &SourceSpec) -> Vec<GenMethod> {
    let target = spec.target_type();
    spec.getters
        .iter()
        .flat_map(|getter| getter_withers(spec, &target, getter))
        .collect()
}

fn getter_withers(spec: &SourceSpec, target: &Type, getter: &Getter) -> Vec<GenMethod> {
    let name = getter.name.as_str();
    let method_name = format!("with{}", capitalize(name));
    let boxed = getter.ty.declared_type();
    let names = || spec.getters.iter().map(|g| g.name.as_str());
    let copy = |replacement: String| {
        format!(
            "return new {}({});",
            target.simple_name(),
            copy_args(names(), name, &replacement)
        )
    };

    vec![
        GenMethod::new(target.clone(), &method_name)
            .param(name, getter.ty.clone())
            .body(copy(name.to_string())),
        GenMethod::new(target.clone(), &method_name)
            .param(name, runtime::supplier(boxed.clone()))
            .body(copy(format!("{}.get()", name))),
        GenMethod::new(target.clone(), &method_name)
            .param(name, runtime::function(boxed.clone(), boxed.clone()))
            .body(copy(format!("{}.apply(this.{})", name, name))),
        GenMethod::new(target.clone(), &method_name)
            .param(name, runtime::bi_function(target.clone(), boxed.clone(), boxed))
            .body(copy(format!("{}.apply(this, this.{})", name, name))),
    ]
}
