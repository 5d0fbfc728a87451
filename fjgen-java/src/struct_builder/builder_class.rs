//! Staged builder.
//!
//! Required fields are collected one stage at a time: the `Builder` class
//! takes the first one and returns a single-method interface for the next,
//! down to `Builder_ready`. Defaulted fields can only be set on
//! `Builder_ready`, which also carries `build()`, so they can always be
//! skipped.

use fjgen_codegen::builder::Lines;
use fjgen_core::capitalize;
use fjgen_ir::{Getter, SourceSpec, Type};

use super::withers::copy_args;
use crate::ast::{Accessibility, ClassSpec, GenConstructor, GenField, GenMethod, Scope};

pub(super) const BUILDER: &str = "Builder";
pub(super) const READY: &str = "Builder_ready";

fn builder_type(spec: &SourceSpec) -> Type {
    Type::nested(&spec.target_package, &spec.target_name, BUILDER)
}

fn stage_type(spec: &SourceSpec, name: &str) -> Type {
    Type::nested(
        &spec.target_package,
        format!("{}.{}", spec.target_name, BUILDER),
        name,
    )
}

fn ready_type(spec: &SourceSpec) -> Type {
    stage_type(spec, READY)
}

fn without_type(spec: &SourceSpec, getter: &Getter) -> Type {
    stage_type(spec, &format!("Builder_without{}", capitalize(&getter.name)))
}

/// The value a getter starts with before any setter is called.
fn initial_value(getter: &Getter) -> String {
    if getter.is_required() {
        getter.name.clone()
    } else {
        getter
            .default_value_code()
            .or_else(|| getter.resolved_default())
            .unwrap_or_else(|| "null".to_string())
    }
}

fn new_ready(spec: &SourceSpec) -> String {
    let args: Vec<String> = spec.getters.iter().map(initial_value).collect();
    format!("new {}({})", ready_type(spec), args.join(", "))
}

/// The static `builder()` entry point.
pub(super) fn builder_method(spec: &SourceSpec) -> GenMethod {
    if spec.getters.iter().any(Getter::is_required) {
        let builder = builder_type(spec);
        GenMethod::new(builder.clone(), "builder")
            .scope(Scope::Static)
            .body(format!("return new {}();", builder))
    } else {
        GenMethod::new(ready_type(spec), "builder")
            .scope(Scope::Static)
            .body(format!("return {};", new_ready(spec)))
    }
}

/// The nested `Builder` class with its stage interfaces and `Builder_ready`.
pub(super) fn builder_class(spec: &SourceSpec) -> ClassSpec {
    let required: Vec<&Getter> = spec.getters.iter().filter(|g| g.is_required()).collect();
    let mut class = ClassSpec::new(builder_type(spec)).static_().final_();

    if let Some((first, rest)) = required.split_first() {
        let next = rest
            .first()
            .map(|g| without_type(spec, g))
            .unwrap_or_else(|| ready_type(spec));
        let lambdas: String = rest.iter().map(|g| format!("{} -> ", g.name)).collect();
        class = class.method(
            GenMethod::new(next, &first.name)
                .param(&first.name, first.ty.clone())
                .body(format!("return {}{};", lambdas, new_ready(spec))),
        );

        for (i, getter) in rest.iter().enumerate() {
            let next = rest
                .get(i + 1)
                .map(|g| without_type(spec, g))
                .unwrap_or_else(|| ready_type(spec));
            class = class.inner_class(
                ClassSpec::interface(without_type(spec, getter))
                    .static_()
                    .annotation("@FunctionalInterface")
                    .method(GenMethod::new(next, &getter.name).param(&getter.name, getter.ty.clone())),
            );
        }
    }

    class.inner_class(ready_class(spec))
}

fn ready_class(spec: &SourceSpec) -> ClassSpec {
    let ready = ready_type(spec);
    let names = || spec.getters.iter().map(|g| g.name.as_str());

    let constructor = spec
        .getters
        .iter()
        .fold(
            GenConstructor::new(READY).accessibility(Accessibility::Private),
            |ctor, g| ctor.param(&g.name, g.ty.clone()),
        )
        .body(Lines::lines(
            spec.getters
                .iter()
                .map(|g| format!("this.{} = {};", g.name, g.name)),
        ));

    let setters: Vec<GenMethod> = spec
        .getters
        .iter()
        .filter(|g| !g.is_required())
        .map(|g| {
            GenMethod::new(ready.clone(), &g.name)
                .param(&g.name, g.ty.clone())
                .body(format!(
                    "return new {}({});",
                    ready,
                    copy_args(names(), &g.name, &g.name)
                ))
        })
        .collect();

    let build = GenMethod::new(spec.target_type(), "build").body(format!(
        "return new {}({});",
        spec.target_name,
        names().collect::<Vec<_>>().join(", ")
    ));

    ClassSpec::new(ready)
        .static_()
        .final_()
        .fields(
            spec.getters
                .iter()
                .map(|g| GenField::new(g.ty.clone(), &g.name)),
        )
        .constructor(constructor)
        .methods(setters)
        .method(build)
}

#[cfg(test)]
mod tests {
    use fjgen_codegen::builder::CodeBuilder;
    use fjgen_ir::DefaultValue;

    use super::*;

    fn car() -> SourceSpec {
        SourceSpec::new("com.example", "Car")
            .getter(Getter::new("make", Type::string()))
            .getter(Getter::new("year", Type::int()))
            .getter(
                Getter::new("color", Type::string())
                    .nullable()
                    .with_default(DefaultValue::Null),
            )
    }

    fn render(class: &ClassSpec) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(class);
        builder.build()
    }

    #[test]
    fn test_car_builder() {
        insta::assert_snapshot!(render(&builder_class(&car())), @r"
        public static final class Builder {
            public Car.Builder.Builder_withoutYear make(String make) {
                return year -> new Car.Builder.Builder_ready(make, year, null);
            }

            @FunctionalInterface
            public static interface Builder_withoutYear {
                public Car.Builder.Builder_ready year(int year);
            }

            public static final class Builder_ready {
                private final String make;
                private final int year;
                private final String color;

                private Builder_ready(String make, int year, String color) {
                    this.make = make;
                    this.year = year;
                    this.color = color;
                }

                public Car.Builder.Builder_ready color(String color) {
                    return new Car.Builder.Builder_ready(this.make, this.year, color);
                }

                public Car build() {
                    return new Car(make, year, color);
                }
            }
        }
        ");
    }

    #[test]
    fn test_builder_entry_point() {
        let method = builder_method(&car());
        assert_eq!(method.return_type.to_string(), "Car.Builder");
        assert_eq!(
            method.body.unwrap().to_vec(),
            vec!["return new Car.Builder();"]
        );
    }

    #[test]
    fn test_all_defaulted_starts_ready() {
        let spec = SourceSpec::new("com.example", "Options").getter(
            Getter::new("verbose", Type::new("java.lang", "Boolean"))
                .nullable()
                .with_default(DefaultValue::Literal("false".into())),
        );
        let method = builder_method(&spec);
        assert_eq!(
            method.body.unwrap().to_vec(),
            vec!["return new Options.Builder.Builder_ready(false);"]
        );
        let class = builder_class(&spec);
        assert!(class.methods.is_empty());
        assert_eq!(class.inner_classes.len(), 1);
    }

    #[test]
    fn test_every_required_field_gets_a_stage() {
        let spec = SourceSpec::new("com.example", "Point")
            .getter(Getter::new("x", Type::int()))
            .getter(Getter::new("y", Type::int()))
            .getter(Getter::new("z", Type::int()));
        let class = builder_class(&spec);
        let stages: Vec<&str> = class.inner_classes.iter().map(ClassSpec::name).collect();
        assert_eq!(
            stages,
            vec!["Builder_withoutY", "Builder_withoutZ", "Builder_ready"]
        );
        assert_eq!(
            class.find_method("x").unwrap().body.as_ref().unwrap().to_vec(),
            vec!["return y -> z -> new Point.Builder.Builder_ready(x, y, z);"]
        );
    }
}
