//! Struct constructors.
//!
//! The all-args constructor is the only one that assigns fields; the
//! required-only and no-arg forms delegate to it with defaults filled in.

use fjgen_codegen::builder::Lines;
use fjgen_ir::{Getter, SourceSpec};

use crate::{
    ast::{Accessibility, GenConstructor},
    runtime,
};

/// Runs the optional post-construct hook once every field is assigned.
pub(super) fn post_construct() -> String {
    let hook = runtime::i_post_construct();
    format!(
        "if (this instanceof {}) (({})this).postConstruct();",
        hook, hook
    )
}

/// All constructors in declaration order: all-args, required-only, no-arg.
///
/// Signature clashes are resolved by the class, which keeps the first.
pub(super) fn constructors(spec: &SourceSpec) -> Vec<GenConstructor> {
    let mut constructors = vec![all_args(spec)];
    constructors.extend(required_only(spec));
    if spec.config.no_arg_constructor {
        constructors.push(no_arg(spec));
    }
    constructors
}

/// Field assignment inside the all-args constructor.
pub(crate) fn assignment(getter: &Getter) -> String {
    let name = &getter.name;
    if getter.ty.is_primitive() {
        return format!("this.{} = {};", name, name);
    }
    if let Some(default) = getter.default_value_code().filter(|code| code != "null") {
        return format!(
            "this.{} = java.util.Optional.ofNullable({}).orElseGet(() -> {});",
            name, name, default
        );
    }
    if getter.nullable {
        format!("this.{} = {};", name, name)
    } else {
        format!("this.{} = $utils.notNull({});", name, name)
    }
}

fn all_args(spec: &SourceSpec) -> GenConstructor {
    let accessibility = if spec.config.all_args_constructor_public {
        Accessibility::Public
    } else {
        Accessibility::Private
    };
    let assignments: Vec<String> = spec.getters.iter().map(assignment).collect();
    let needs_utils = assignments.iter().any(|line| line.contains("$utils."));
    let ctor = spec
        .getters
        .iter()
        .fold(GenConstructor::new(&spec.target_name), |ctor, getter| {
            ctor.param(&getter.name, getter.ty.clone())
        })
        .accessibility(accessibility)
        .body(Lines::of([Lines::lines(assignments), Lines::line(post_construct())]))
        .uses(runtime::i_post_construct());
    if needs_utils {
        ctor.uses(runtime::utils())
    } else {
        ctor
    }
}

fn delegate(args: Vec<String>) -> Lines {
    Lines::line(format!("this({});", args.join(", ")))
}

/// Value used for a field omitted by a shorter constructor.
fn omitted_value(getter: &Getter) -> String {
    getter
        .default_value_code()
        .or_else(|| getter.resolved_default())
        .unwrap_or_else(|| "null".to_string())
}

fn required_only(spec: &SourceSpec) -> Option<GenConstructor> {
    let has_required = spec.getters.iter().any(Getter::is_required);
    let has_defaulted = spec.getters.iter().any(|g| !g.is_required());
    if !(has_required && has_defaulted) {
        return None;
    }
    let args = spec
        .getters
        .iter()
        .map(|g| {
            if g.is_required() {
                g.name.clone()
            } else {
                omitted_value(g)
            }
        })
        .collect();
    let ctor = spec
        .getters
        .iter()
        .filter(|g| g.is_required())
        .fold(GenConstructor::new(&spec.target_name), |ctor, getter| {
            ctor.param(&getter.name, getter.ty.clone())
        });
    Some(ctor.body(delegate(args)))
}

fn no_arg(spec: &SourceSpec) -> GenConstructor {
    let args = spec
        .getters
        .iter()
        .map(|g| g.resolved_default().unwrap_or_else(|| omitted_value(g)))
        .collect();
    GenConstructor::new(&spec.target_name).body(delegate(args))
}

#[cfg(test)]
mod tests {
    use fjgen_codegen::builder::CodeBuilder;
    use fjgen_ir::{Configurations, DefaultValue, Type};

    use super::*;
    use crate::ast::ClassSpec;

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

    fn render(ctors: &[GenConstructor]) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(ctors);
        builder.build()
    }

    #[test]
    fn test_assignment_kinds() {
        assert_eq!(
            assignment(&Getter::new("make", Type::string())),
            "this.make = $utils.notNull(make);"
        );
        assert_eq!(
            assignment(&Getter::new("year", Type::int())),
            "this.year = year;"
        );
        assert_eq!(
            assignment(&Getter::new("nick", Type::string()).nullable()),
            "this.nick = nick;"
        );
        assert_eq!(
            assignment(
                &Getter::new("tags", Type::new("functionalj.list", "FuncList"))
                    .nullable()
                    .with_default(DefaultValue::Empty)
            ),
            "this.tags = java.util.Optional.ofNullable(tags).orElseGet(() -> functionalj.list.ImmutableFuncList.empty());"
        );
        assert_eq!(
            assignment(
                &Getter::new("color", Type::string())
                    .nullable()
                    .with_default(DefaultValue::Null)
            ),
            "this.color = color;"
        );
    }

    #[test]
    fn test_car_constructors() {
        insta::assert_snapshot!(render(&constructors(&car())), @r"
        public Car(String make, int year, String color) {
            this.make = $utils.notNull(make);
            this.year = year;
            this.color = color;
            if (this instanceof IPostConstruct) ((IPostConstruct)this).postConstruct();
        }
        public Car(String make, int year) {
            this(make, year, null);
        }
        ");
    }

    #[test]
    fn test_post_construct_emitted_once() {
        let rendered = render(&constructors(&car()));
        assert_eq!(rendered.matches("postConstruct()").count(), 1);
    }

    #[test]
    fn test_no_arg_uses_resolved_defaults() {
        let spec = SourceSpec::new("com.example", "Point")
            .config(Configurations {
                no_arg_constructor: true,
                all_args_constructor_public: false,
                ..Configurations::default()
            })
            .getter(Getter::new("x", Type::int()))
            .getter(Getter::new("label", Type::string()).nullable());
        let ctors = constructors(&spec);
        assert_eq!(ctors.len(), 2);
        assert_eq!(ctors[0].accessibility, Accessibility::Private);
        assert_eq!(ctors[1].body.to_vec(), vec!["this(0, null);"]);
    }

    #[test]
    fn test_no_required_only_when_nothing_defaulted() {
        let spec = SourceSpec::new("com.example", "Point").getter(Getter::new("x", Type::int()));
        assert_eq!(constructors(&spec).len(), 1);
    }

    #[test]
    fn test_empty_struct_keeps_single_constructor() {
        let spec = SourceSpec::new("com.example", "Unit").config(Configurations {
            no_arg_constructor: true,
            ..Configurations::default()
        });
        let class = constructors(&spec)
            .into_iter()
            .fold(ClassSpec::new(spec.target_type()), ClassSpec::constructor);
        assert_eq!(class.constructors.len(), 1);
        assert_eq!(class.constructors[0].body.to_vec(), vec![post_construct()]);
    }
}
