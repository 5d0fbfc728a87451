//! Map codec: `fromMap`, `__toMap` and the property schema.

use fjgen_codegen::builder::Lines;
use fjgen_ir::{SourceSpec, Type};

use crate::{
    ast::{GenMethod, Scope},
    runtime,
    schema::{self, MAP, SCHEMA},
};

pub(super) fn codec_methods(spec: &SourceSpec) -> Vec<GenMethod> {
    vec![from_map(spec), to_map(spec), get_schema(), struct_schema(spec)]
}

fn schema_type() -> Type {
    runtime::map(Type::string(), runtime::getter())
}

fn incoming_map() -> Type {
    runtime::map(Type::string(), Type::object().to_extends())
}

fn from_map(spec: &SourceSpec) -> GenMethod {
    let target = spec.target_type();
    let names: Vec<&str> = spec.getters.iter().map(|g| g.name.as_str()).collect();
    let body = Lines::of([
        Lines::line(format!("{} {} = getStructSchema();", schema_type(), SCHEMA)),
        Lines::lines(
            spec.getters
                .iter()
                .map(|g| schema::extract_line(&target, &g.name, &g.ty)),
        ),
        Lines::line(format!(
            "return new {}({});",
            target.simple_name(),
            names.join(", ")
        )),
    ]);
    GenMethod::new(target, "fromMap")
        .scope(Scope::Static)
        .param(MAP, incoming_map())
        .body(body)
        .uses(runtime::utils())
}

fn to_map(spec: &SourceSpec) -> GenMethod {
    let map = runtime::map(Type::string(), Type::object());
    let body = Lines::of([
        Lines::line(format!("{} {} = new java.util.HashMap<>();", map, MAP)),
        Lines::lines(spec.getters.iter().map(|g| schema::to_map_line(&g.name))),
        Lines::line(format!("return {};", MAP)),
    ]);
    GenMethod::new(map, "__toMap")
        .body(body)
        .uses(runtime::utils())
}

fn get_schema() -> GenMethod {
    GenMethod::new(schema_type(), "__getSchema").body("return getStructSchema();")
}

fn struct_schema(spec: &SourceSpec) -> GenMethod {
    let getter = runtime::getter();
    let body = Lines::of([
        Lines::line(format!(
            "{} {} = new java.util.HashMap<>();",
            schema_type(),
            MAP
        )),
        Lines::lines(spec.getters.iter().map(|g| {
            schema::schema_entry(&getter, &g.name, &g.ty, g.nullable, &g.default_value)
        })),
        Lines::line(format!("return {};", MAP)),
    ]);
    GenMethod::new(schema_type(), "getStructSchema")
        .scope(Scope::Static)
        .body(body)
        .uses(runtime::default_value())
}

#[cfg(test)]
mod tests {
    use fjgen_codegen::builder::CodeBuilder;
    use fjgen_ir::{DefaultValue, Getter};

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

    fn render(method: &GenMethod) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(method);
        builder.build()
    }

    #[test]
    fn test_from_map() {
        insta::assert_snapshot!(render(&from_map(&car())), @r#"
        public static Car fromMap(Map<String, ? extends Object> $map) {
            Map<String, Getter> $schema = getStructSchema();
            String make = $utils.extractPropertyFromMap(Car.class, String.class, "make", $map, $schema);
            int year = $utils.extractPropertyFromMap(Car.class, int.class, "year", $map, $schema);
            String color = $utils.extractPropertyFromMap(Car.class, String.class, "color", $map, $schema);
            return new Car(make, year, color);
        }
        "#);
    }

    #[test]
    fn test_to_map_writes_every_field() {
        insta::assert_snapshot!(render(&to_map(&car())), @r#"
        public Map<String, Object> __toMap() {
            Map<String, Object> $map = new java.util.HashMap<>();
            $map.put("make", $utils.toMapValueObject(this.make));
            $map.put("year", $utils.toMapValueObject(this.year));
            $map.put("color", $utils.toMapValueObject(this.color));
            return $map;
        }
        "#);
    }

    #[test]
    fn test_round_trip_keys_match() {
        let spec = car();
        let from = render(&from_map(&spec));
        let to = render(&to_map(&spec));
        for getter in &spec.getters {
            let key = format!("\"{}\"", getter.name);
            assert!(from.contains(&key), "fromMap misses {}", key);
            assert!(to.contains(&key), "__toMap misses {}", key);
        }
    }

    #[test]
    fn test_schema_lists_policies() {
        let rendered = render(&struct_schema(&car()));
        assert!(rendered.starts_with("public static Map<String, Getter> getStructSchema() {"));
        assert!(rendered.contains("new Getter(\"make\", new functionalj.types.Type(\"java.lang\", null, \"String\", java.util.Collections.emptyList()), false, DefaultValue.REQUIRED)"));
        assert!(rendered.contains("true, DefaultValue.NULL)"));
    }
}
