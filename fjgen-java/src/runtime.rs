//! Runtime support types referenced by generated sources.
//!
//! Generated code compiles against the FunctionalJ runtime; these are the
//! fixed names it expects.

use fjgen_ir::{
    Type,
    packages::{JAVA_LANG, JAVA_UTIL, JAVA_UTIL_FUNCTION, LENS_CORE, LENSES, PIPEABLE, RESULT, TYPES},
};

pub fn map(key: Type, value: Type) -> Type {
    Type::new(JAVA_UTIL, "Map").with_generics([key, value])
}

pub fn list(element: Type) -> Type {
    Type::new(JAVA_UTIL, "List").with_generics([element])
}

pub fn exception() -> Type {
    Type::new(JAVA_LANG, "Exception")
}

pub fn supplier(ty: Type) -> Type {
    Type::new(JAVA_UTIL_FUNCTION, "Supplier").with_generics([ty])
}

pub fn function(input: Type, output: Type) -> Type {
    Type::new(JAVA_UTIL_FUNCTION, "Function").with_generics([input, output])
}

pub fn bi_function(first: Type, second: Type, output: Type) -> Type {
    Type::new(JAVA_UTIL_FUNCTION, "BiFunction").with_generics([first, second, output])
}

pub fn consumer(ty: Type) -> Type {
    Type::new(JAVA_UTIL_FUNCTION, "Consumer").with_generics([ty])
}

pub fn predicate(ty: Type) -> Type {
    Type::new(JAVA_UTIL_FUNCTION, "Predicate").with_generics([ty])
}

pub fn runnable() -> Type {
    Type::new(JAVA_LANG, "Runnable")
}

pub fn pipeable(ty: Type) -> Type {
    Type::new(PIPEABLE, "Pipeable").with_generics([ty])
}

pub fn result(ty: Type) -> Type {
    Type::new(RESULT, "Result").with_generics([ty])
}

pub fn i_struct() -> Type {
    Type::new(TYPES, "IStruct")
}

pub fn i_choice(switch: Type) -> Type {
    Type::new(TYPES, "IChoice").with_generics([switch])
}

pub fn i_post_construct() -> Type {
    Type::new(TYPES, "IPostConstruct")
}

/// `$utils` is nested in `IData` and imported directly by its full name.
pub fn utils() -> Type {
    Type::new(format!("{}.IData", TYPES), "$utils")
}

pub fn default_value() -> Type {
    Type::new(TYPES, "DefaultValue")
}

/// Always written fully qualified: `Type` clashes too easily with user types.
pub const TYPE_FQN: &str = "functionalj.types.Type";

pub fn getter() -> Type {
    Type::new(format!("{}.struct.generator", TYPES), "Getter")
}

pub fn case_param() -> Type {
    Type::new(format!("{}.choice.generator.model", TYPES), "CaseParam")
}

pub fn choice_type_switch(data: Type, target: Type) -> Type {
    Type::new(format!("{}.choice", TYPES), "ChoiceTypeSwitch").with_generics([data, target])
}

pub fn lens_spec(host: Type, data: Type) -> Type {
    Type::new(LENS_CORE, "LensSpec").with_generics([host, data])
}

pub fn lens(name: &str, generics: impl IntoIterator<Item = Type>) -> Type {
    Type::new(LENSES, name).with_generics(generics)
}

pub fn object_lens_impl(host: Type, data: Type) -> Type {
    lens("ObjectLensImpl", [host, data])
}

pub fn object_lens(host: Type, data: Type) -> Type {
    lens("ObjectLens", [host, data])
}
