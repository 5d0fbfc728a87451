//! Nested case classes and the `Tag` enum.

use fjgen_codegen::builder::Lines;
use fjgen_core::{capitalize, java_string_literal};
use fjgen_ir::{Case, ChoiceSpec, Getter, Type};

use super::{case_getters, tag_constant, tag_type};
use crate::{
    ast::{Accessibility, ClassSpec, GenConstructor, GenField, GenMethod, Scope},
    lens::{self, LensProperty},
    runtime,
    schema::{self, MAP, SCHEMA},
    struct_builder::{assignment, copy_args, equals_body, hash_code_body, to_string_expression},
};

/// Name of the shared instance held by parameterless cases.
pub(super) const INSTANCE: &str = "instance";

/// `public static enum Tag { A, B; }`
pub(super) fn tag_enum(spec: &ChoiceSpec) -> ClassSpec {
    spec.cases
        .iter()
        .fold(ClassSpec::enumeration(tag_type(spec)).static_(), |tag, case| {
            tag.constant(&case.name)
        })
}

/// One `public static final` subclass per case.
pub(super) fn case_class(spec: &ChoiceSpec, case: &Case) -> ClassSpec {
    let case_type = spec.case_type(case);
    let getters = case_getters(case);
    let names: Vec<&str> = getters.iter().map(|g| g.name.as_str()).collect();

    let mut class = ClassSpec::new(case_type.clone())
        .static_()
        .final_()
        .extends(spec.target_type());

    if spec.generate_lens {
        class = class.fields(lens::lens_constants(&case_type));
    }
    if !case.has_params() {
        class = class.field(
            GenField::new(case_type.clone(), INSTANCE)
                .scope(Scope::Static)
                .value(format!("new {}()", case_type)),
        );
    }
    class = class.fields(getters.iter().map(|g| GenField::new(g.ty.clone(), &g.name)));

    let constructor = getters
        .iter()
        .fold(
            GenConstructor::new(&case.name).accessibility(Accessibility::Private),
            |ctor, g| ctor.param(&g.name, g.ty.clone()),
        )
        .body(Lines::lines(getters.iter().map(assignment)));
    class = class.constructor(if getters.iter().any(|g| assignment(g).contains("$utils.")) {
        constructor.uses(runtime::utils())
    } else {
        constructor
    });

    let accessors = getters
        .iter()
        .map(|g| GenMethod::new(g.ty.clone(), &g.name).body(format!("return {};", g.name)));
    let withers = getters.iter().map(|g| {
        GenMethod::new(case_type.clone(), format!("with{}", capitalize(&g.name)))
            .param(&g.name, g.ty.clone())
            .body(format!(
                "return new {}({});",
                case_type,
                copy_args(names.iter().copied(), &g.name, &g.name)
            ))
    });

    class = class
        .methods(accessors)
        .methods(withers)
        .method(
            GenMethod::new(tag_type(spec), "__tag")
                .annotation("@Override")
                .body(format!("return {};", tag_constant(spec, case))),
        )
        .method(to_map(case, &getters))
        .method(case_from_map(spec, case, &getters))
        .method(case_schema(&getters))
        .method(
            GenMethod::new(Type::string(), "toCaseString")
                .accessibility(Accessibility::Protected)
                .annotation("@Override")
                .body(format!("return {};", case_string(case, &names))),
        )
        .method(
            GenMethod::new(Type::int(), "hashCode")
                .annotation("@Override")
                .body(hash_code_body(Some(&tag_constant(spec, case)), &names)),
        )
        .method(
            GenMethod::new(Type::boolean(), "equals")
                .annotation("@Override")
                .param("another", Type::object())
                .body(equals_body(&case_type.to_string(), &names)),
        );

    if spec.generate_lens {
        class = class.inner_class(case_lens(spec, &case_type, &getters));
    }
    class
}

/// `Accepted(newData: x)`, or just `Pending` without parameters.
fn case_string(case: &Case, names: &[&str]) -> String {
    if names.is_empty() {
        java_string_literal(&case.name)
    } else {
        to_string_expression(&case.name, names, "(", ")")
    }
}

fn to_map(case: &Case, getters: &[Getter]) -> GenMethod {
    let map = runtime::map(Type::string(), Type::object());
    GenMethod::new(map.clone(), "__toMap")
        .annotation("@Override")
        .body(Lines::of([
            Lines::line(format!("{} {} = new java.util.HashMap<>();", map, MAP)),
            Lines::line(format!(
                "{}.put(\"__tagged\", {}.toMapValueObject({}));",
                MAP,
                runtime::utils(),
                java_string_literal(&case.name)
            )),
            Lines::lines(getters.iter().map(|g| schema::to_map_line(&g.name))),
            Lines::line(format!("return {};", MAP)),
        ]))
        .uses(runtime::utils())
}

fn case_from_map(spec: &ChoiceSpec, case: &Case, getters: &[Getter]) -> GenMethod {
    let case_type = spec.case_type(case);
    let incoming = runtime::map(Type::string(), Type::object().to_extends());
    let body = if getters.is_empty() {
        Lines::line(format!("return {}.{};", case_type, INSTANCE))
    } else {
        let schema_type = runtime::map(Type::string(), runtime::case_param());
        Lines::of([
            Lines::line(format!("{} {} = getCaseSchema();", schema_type, SCHEMA)),
            Lines::lines(
                getters
                    .iter()
                    .map(|g| schema::extract_line(&case_type, &g.name, &g.ty)),
            ),
            Lines::line(format!(
                "return new {}({});",
                case_type,
                getters
                    .iter()
                    .map(|g| g.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        ])
    };
    let method = GenMethod::new(case_type, "caseFromMap")
        .scope(Scope::Static)
        .param(MAP, incoming)
        .body(body);
    if getters.is_empty() {
        method
    } else {
        method.uses(runtime::utils())
    }
}

fn case_schema(getters: &[Getter]) -> GenMethod {
    let case_param = runtime::case_param();
    let schema_type = runtime::map(Type::string(), case_param.clone());
    GenMethod::new(schema_type.clone(), "getCaseSchema")
        .scope(Scope::Static)
        .body(Lines::of([
            Lines::line(format!(
                "{} {} = new java.util.HashMap<>();",
                schema_type, MAP
            )),
            Lines::lines(getters.iter().map(|g| {
                schema::schema_entry(&case_param, &g.name, &g.ty, g.nullable, &g.default_value)
            })),
            Lines::line(format!("return {};", MAP)),
        ]))
        .uses(runtime::default_value())
}

fn case_lens(spec: &ChoiceSpec, case_type: &Type, getters: &[Getter]) -> ClassSpec {
    let has_lens = |ty: &Type| spec.has_lens(ty);
    let fields = getters
        .iter()
        .map(|g| {
            let property = LensProperty {
                name: &g.name,
                ty: &g.ty,
                getter: format!("{}::{}", case_type, g.name),
                setter: format!(
                    "(host, newValue) -> host.with{}(newValue)",
                    capitalize(&g.name)
                ),
            };
            lens::sub_lens_field(&property, &has_lens)
        })
        .collect();
    lens::lens_class(case_type, fields)
}
