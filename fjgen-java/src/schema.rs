//! Map codec and schema snippets shared by struct and case classes.

use fjgen_core::java_string_literal;
use fjgen_ir::{DefaultValue, Type};

use crate::runtime::{self, TYPE_FQN};

/// Local variable holding the map inside generated codec methods.
pub(crate) const MAP: &str = "$map";
/// Local variable holding the schema inside `fromMap`.
pub(crate) const SCHEMA: &str = "$schema";

/// A `functionalj.types.Type` constructor expression describing `ty`.
pub(crate) fn type_literal(ty: &Type) -> String {
    let quoted = |s: Option<&str>| s.map(java_string_literal).unwrap_or_else(|| "null".into());
    let generics = if ty.generics().is_empty() {
        "java.util.Collections.emptyList()".to_string()
    } else {
        let args: Vec<String> = ty.generics().iter().map(type_literal).collect();
        format!("java.util.Arrays.asList({})", args.join(", "))
    };
    format!(
        "new {}({}, {}, {}, {})",
        TYPE_FQN,
        quoted(ty.package_name()),
        quoted(ty.enclosing_name()),
        java_string_literal(ty.simple_name()),
        generics
    )
}

/// `$schema.put("<name>", new <Kind>("<name>", <type>, <nullable>, DefaultValue.<X>));`
pub(crate) fn schema_entry(
    kind: &Type,
    name: &str,
    ty: &Type,
    nullable: bool,
    default_value: &DefaultValue,
) -> String {
    format!(
        "{}.put({}, new {}({}, {}, {}, {}.{}));",
        MAP,
        java_string_literal(name),
        kind.erasure(),
        java_string_literal(name),
        type_literal(ty),
        nullable,
        runtime::default_value(),
        default_value.java_constant()
    )
}

/// Read one property out of the incoming map into a local of the same name.
pub(crate) fn extract_line(owner: &Type, name: &str, ty: &Type) -> String {
    format!(
        "{} {} = {}.extractPropertyFromMap({}.class, {}.class, {}, {}, {});",
        ty,
        name,
        runtime::utils(),
        owner.erasure(),
        ty.erasure(),
        java_string_literal(name),
        MAP,
        SCHEMA
    )
}

pub(crate) fn to_map_line(name: &str) -> String {
    format!(
        "{}.put({}, {}.toMapValueObject(this.{}));",
        MAP,
        java_string_literal(name),
        runtime::utils(),
        name
    )
}
