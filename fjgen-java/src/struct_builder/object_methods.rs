//! `toString`, `equals`, `hashCode` and `__data`.

use fjgen_codegen::builder::Lines;
use fjgen_ir::{SourceSpec, Type};

use crate::{ast::GenMethod, runtime};

pub(super) fn object_methods(spec: &SourceSpec) -> Vec<GenMethod> {
    let target = spec.target_type();
    let names: Vec<&str> = spec.getters.iter().map(|g| g.name.as_str()).collect();
    vec![
        pipeable_data(&target),
        to_string(&target, &names),
        hash_code(&names),
        equals(&target, &names),
    ]
}

/// `Pipeable` support: the struct pipes itself.
pub(crate) fn pipeable_data(target: &Type) -> GenMethod {
    GenMethod::new(target.clone(), "__data")
        .throws(runtime::exception())
        .body("return this;")
}

/// Renders `Name[a: 1, b: 2]`.
pub(crate) fn to_string_expression(name: &str, fields: &[&str], open: &str, close: &str) -> String {
    if fields.is_empty() {
        return format!("\"{}{}{}\"", name, open, close);
    }
    let parts: Vec<String> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let prefix = if i == 0 {
                format!("{}{}", name, open)
            } else {
                ", ".to_string()
            };
            format!("\"{}{}: \" + {}", prefix, field, field)
        })
        .collect();
    format!("{} + \"{}\"", parts.join(" + "), close)
}

fn to_string(target: &Type, names: &[&str]) -> GenMethod {
    GenMethod::new(Type::string(), "toString")
        .annotation("@Override")
        .body(format!(
            "return {};",
            to_string_expression(target.simple_name(), names, "[", "]")
        ))
}

pub(crate) fn hash_code_body(seed: Option<&str>, names: &[&str]) -> String {
    let args: Vec<&str> = seed.into_iter().chain(names.iter().copied()).collect();
    format!("return java.util.Objects.hash({});", args.join(", "))
}

fn hash_code(names: &[&str]) -> GenMethod {
    GenMethod::new(Type::int(), "hashCode")
        .annotation("@Override")
        .body(hash_code_body(None, names))
}

/// Structural equality on `names` against another instance of `ty`.
pub(crate) fn equals_body(ty: &str, names: &[&str]) -> Lines {
    let comparison = if names.is_empty() {
        Lines::line("return true;")
    } else {
        let last = names.len() - 1;
        let lines = names.iter().enumerate().map(|(i, name)| {
            let head = if i == 0 { "return " } else { "    && " };
            let tail = if i == last { ";" } else { "" };
            format!(
                "{}java.util.Objects.equals({}, that.{}){}",
                head, name, name, tail
            )
        });
        Lines::lines(lines.collect::<Vec<_>>())
    };
    Lines::of([
        Lines::line("if (this == another)"),
        Lines::line("return true;").indent(),
        Lines::line(format!("if (!(another instanceof {}))", ty)),
        Lines::line("return false;").indent(),
        if names.is_empty() {
            Lines::empty()
        } else {
            Lines::line(format!("{} that = ({})another;", ty, ty))
        },
        comparison,
    ])
}

fn equals(target: &Type, names: &[&str]) -> GenMethod {
    GenMethod::new(Type::boolean(), "equals")
        .annotation("@Override")
        .param("another", Type::object())
        .body(equals_body(target.simple_name(), names))
}

#[cfg(test)]
mod tests {
    use fjgen_codegen::builder::CodeBuilder;
    use fjgen_ir::{DefaultValue, Getter};

    use super::*;

    fn render(method: &GenMethod) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(method);
        builder.build()
    }

    #[test]
    fn test_to_string_expression() {
        assert_eq!(
            to_string_expression("Car", &["make", "year"], "[", "]"),
            r#""Car[make: " + make + ", year: " + year + "]""#
        );
        assert_eq!(to_string_expression("Unit", &[], "[", "]"), r#""Unit[]""#);
    }

    #[test]
    fn test_car_object_methods() {
        let spec = SourceSpec::new("com.example", "Car")
            .getter(Getter::new("make", Type::string()))
            .getter(Getter::new("year", Type::int()))
            .getter(
                Getter::new("color", Type::string())
                    .nullable()
                    .with_default(DefaultValue::Null),
            );
        let mut builder = CodeBuilder::java();
        builder.emit(object_methods(&spec).as_slice());
        insta::assert_snapshot!(builder.build(), @r#"
        public Car __data() throws Exception {
            return this;
        }
        @Override
        public String toString() {
            return "Car[make: " + make + ", year: " + year + ", color: " + color + "]";
        }
        @Override
        public int hashCode() {
            return java.util.Objects.hash(make, year, color);
        }
        @Override
        public boolean equals(Object another) {
            if (this == another)
                return true;
            if (!(another instanceof Car))
                return false;
            Car that = (Car)another;
            return java.util.Objects.equals(make, that.make)
                && java.util.Objects.equals(year, that.year)
                && java.util.Objects.equals(color, that.color);
        }
        "#);
    }

    #[test]
    fn test_equals_without_fields() {
        let method = equals(&Type::new("com.example", "Unit"), &[]);
        let body = method.body.unwrap().to_vec();
        assert_eq!(body.last().map(String::as_str), Some("return true;"));
        assert!(!render(&equals(&Type::new("com.example", "Unit"), &[])).contains("that"));
    }
}
