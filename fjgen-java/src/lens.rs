//! Lens emission shared by structs and choices.
//!
//! A lens class `<Name>Lens<HOST>` exposes one sub-lens field per property.
//! The sub-lens kind is picked from the property's [`TypeShape`]; anything
//! unrecognized falls back to the generic `ObjectLens`.

use fjgen_ir::{Type, TypeShape, packages::LENSES};

use crate::{
    ast::{Accessibility, ClassSpec, GenConstructor, GenField, Scope},
    runtime,
};

pub(crate) const HOST: &str = "HOST";

pub(crate) fn host() -> Type {
    Type::var(HOST)
}

/// One property viewed through a lens.
pub(crate) struct LensProperty<'a> {
    pub name: &'a str,
    pub ty: &'a Type,
    /// Read accessor, e.g. `Car::make`.
    pub getter: String,
    /// Write function `(host, newValue) -> ...`.
    pub setter: String,
}

/// The lens type for a single value and the expression that creates it from
/// a `LensSpec`.
pub(crate) fn lens_and_creator(ty: &Type, has_lens: &dyn Fn(&Type) -> bool) -> (Type, String) {
    let declared = ty.declared_type().exact();
    let fallback = if has_lens(&declared) {
        None
    } else {
        Some(runtime::object_lens(host(), declared.clone()))
    };
    let lens = declared.lens_type(&host(), fallback);
    let creator = if lens.package_name() == Some(LENSES) {
        format!("{}::of", lens.erasure())
    } else {
        format!("{}::new", lens.erasure())
    };
    (lens, creator)
}

fn type_arg(ty: &Type, index: usize) -> Type {
    ty.type_arg(index)
        .map(Type::exact)
        .unwrap_or_else(Type::object)
}

/// The public sub-lens field for `property`.
pub(crate) fn sub_lens_field(
    property: &LensProperty<'_>,
    has_lens: &dyn Fn(&Type) -> bool,
) -> GenField {
    let LensProperty {
        name,
        ty,
        getter,
        setter,
    } = property;
    let (lens_type, value) = match ty.shape() {
        TypeShape::Int => (
            runtime::lens("IntegerLens", [host()]),
            format!("createSubLensInt({}, {})", getter, setter),
        ),
        TypeShape::Boolean => (
            runtime::lens("BooleanLens", [host()]),
            format!("createSubLensBoolean({}, {})", getter, setter),
        ),
        TypeShape::List | TypeShape::FuncList => {
            let element = type_arg(ty, 0);
            let (element_lens, creator) = lens_and_creator(&element, has_lens);
            let (lens_name, factory) = if ty.shape() == TypeShape::List {
                ("ListLens", "createSubListLens")
            } else {
                ("FuncListLens", "createSubFuncListLens")
            };
            (
                runtime::lens(lens_name, [host(), element, element_lens]),
                format!("{}({}, {}, {})", factory, getter, setter, creator),
            )
        }
        TypeShape::Map | TypeShape::FuncMap => {
            let key = type_arg(ty, 0);
            let value = type_arg(ty, 1);
            let (key_lens, key_creator) = lens_and_creator(&key, has_lens);
            let (value_lens, value_creator) = lens_and_creator(&value, has_lens);
            let (lens_name, factory) = if ty.shape() == TypeShape::Map {
                ("MapLens", "createSubMapLens")
            } else {
                ("FuncMapLens", "createSubFuncMapLens")
            };
            (
                runtime::lens(lens_name, [host(), key, value, key_lens, value_lens]),
                format!(
                    "{}({}, {}, {}, {})",
                    factory, getter, setter, key_creator, value_creator
                ),
            )
        }
        shape @ (TypeShape::Nullable | TypeShape::Optional | TypeShape::Result) => {
            let inner = type_arg(ty, 0);
            let (inner_lens, creator) = lens_and_creator(&inner, has_lens);
            let (lens_name, factory) = match shape {
                TypeShape::Nullable => ("NullableLens", "createSubNullableLens"),
                TypeShape::Optional => ("OptionalLens", "createSubOptionalLens"),
                _ => ("ResultLens", "createSubResultLens"),
            };
            (
                runtime::lens(lens_name, [host(), inner, inner_lens]),
                format!("{}({}, {}, {})", factory, getter, setter, creator),
            )
        }
        TypeShape::Long | TypeShape::Double | TypeShape::String | TypeShape::Object => {
            let (lens, creator) = lens_and_creator(ty, has_lens);
            (
                lens,
                format!("createSubLens({}, {}, {})", getter, setter, creator),
            )
        }
    };
    GenField::new(lens_type, *name)
        .accessibility(Accessibility::Public)
        .value(value)
}

/// The nested lens class for `data`, named `<Simple>Lens<HOST>`.
pub(crate) fn lens_class(data: &Type, fields: Vec<GenField>) -> ClassSpec {
    let lens = lens_type_of(data, host());
    let lens_name = lens.simple_name().to_string();
    ClassSpec::new(lens)
        .static_()
        .extends(runtime::object_lens_impl(host(), data.clone()))
        .fields(fields)
        .constructor(
            GenConstructor::new(lens_name)
                .param("spec", runtime::lens_spec(host(), data.clone()))
                .body("super(spec);"),
        )
}

/// `<data>.<Simple>Lens<host>`.
pub(crate) fn lens_type_of(data: &Type, host: Type) -> Type {
    let package = data.package_name().unwrap_or_default();
    Type::nested(
        package,
        data.local_name(),
        format!("{}Lens", data.simple_name()),
    )
    .with_generics([host])
}

/// Static `the<Name>` and `each<Name>` lens constants for `data`.
pub(crate) fn lens_constants(data: &Type) -> Vec<GenField> {
    let simple = data.simple_name();
    let the_lens = lens_type_of(data, data.clone());
    let each_host = runtime::list(data.clone());
    let each_lens = runtime::lens(
        "ListLens",
        [each_host.clone(), data.clone(), lens_type_of(data, each_host)],
    );
    let creator = lens_type_of(data, host()).erasure();
    let lens_spec = runtime::lens_spec(host(), data.clone());
    let class_literal = data.erasure();
    vec![
        GenField::new(the_lens, format!("the{}", simple))
            .accessibility(Accessibility::Public)
            .scope(Scope::Static)
            .value(format!(
                "new {}<>({}.of({}.class))",
                creator,
                lens_spec.erasure(),
                class_literal
            ))
            .uses(lens_spec),
        GenField::new(each_lens, format!("each{}", simple))
            .accessibility(Accessibility::Public)
            .scope(Scope::Static)
            .value(format!(
                "{}.of({}.class, {}::new)",
                runtime::lens("ListLens", []),
                class_literal,
                creator
            )),
    ]
}

#[cfg(test)]
mod tests {
    use fjgen_codegen::builder::CodeBuilder;

    use super::*;

    fn no_lens(_: &Type) -> bool {
        false
    }

    fn render_field(name: &str, ty: Type, has_lens: &dyn Fn(&Type) -> bool) -> String {
        let property = LensProperty {
            name,
            ty: &ty,
            getter: format!("Car::{}", name),
            setter: "SET".to_string(),
        };
        let mut builder = CodeBuilder::java();
        builder.emit(&sub_lens_field(&property, has_lens));
        builder.build().trim_end().to_string()
    }

    #[test]
    fn test_scalar_lenses() {
        assert_eq!(
            render_field("year", Type::int(), &no_lens),
            "public final IntegerLens<HOST> year = createSubLensInt(Car::year, SET);"
        );
        assert_eq!(
            render_field("used", Type::boolean(), &no_lens),
            "public final BooleanLens<HOST> used = createSubLensBoolean(Car::used, SET);"
        );
        assert_eq!(
            render_field("make", Type::string(), &no_lens),
            "public final StringLens<HOST> make = createSubLens(Car::make, SET, StringLens::of);"
        );
        assert_eq!(
            render_field("mileage", Type::long(), &no_lens),
            "public final LongLens<HOST> mileage = createSubLens(Car::mileage, SET, LongLens::of);"
        );
    }

    #[test]
    fn test_unknown_type_falls_back_to_object_lens() {
        let date = Type::new("java.time", "LocalDate");
        assert_eq!(
            render_field("built", date, &no_lens),
            "public final ObjectLens<HOST, LocalDate> built = createSubLens(Car::built, SET, ObjectLens::of);"
        );
    }

    #[test]
    fn test_generated_lens_is_used_when_known() {
        let person = Type::new("com.example", "Person");
        let known = |ty: &Type| ty.full_name() == "com.example.Person";
        assert_eq!(
            render_field("owner", person, &known),
            "public final Person.PersonLens<HOST> owner = createSubLens(Car::owner, SET, Person.PersonLens::new);"
        );
    }

    #[test]
    fn test_qualified_lens_type_and_creator() {
        let order = Type::new("com.legacy", "Order");
        let known = |ty: &Type| ty.full_name() == "com.legacy.Order";
        let qualified = ["com.legacy.Order".to_string()].into_iter().collect();
        let rendered = fjgen_ir::with_qualified_names(&qualified, || {
            render_field("prior", order, &known)
        });
        assert_eq!(
            rendered,
            "public final com.legacy.Order.OrderLens<HOST> prior = createSubLens(Car::prior, SET, com.legacy.Order.OrderLens::new);"
        );
    }

    #[test]
    fn test_container_lenses() {
        let tags = Type::new("java.util", "List").with_generics([Type::string()]);
        assert_eq!(
            render_field("tags", tags, &no_lens),
            "public final ListLens<HOST, String, StringLens<HOST>> tags = createSubListLens(Car::tags, SET, StringLens::of);"
        );

        let scores = Type::new("functionalj.map", "FuncMap")
            .with_generics([Type::string(), Type::integer()]);
        assert_eq!(
            render_field("scores", scores, &no_lens),
            "public final FuncMapLens<HOST, String, Integer, StringLens<HOST>, IntegerLens<HOST>> scores = createSubFuncMapLens(Car::scores, SET, StringLens::of, IntegerLens::of);"
        );

        let nickname = Type::new("java.util", "Optional").with_generics([Type::string()]);
        assert_eq!(
            render_field("nickname", nickname, &no_lens),
            "public final OptionalLens<HOST, String, StringLens<HOST>> nickname = createSubOptionalLens(Car::nickname, SET, StringLens::of);"
        );
    }

    #[test]
    fn test_raw_container_uses_object_elements() {
        let raw = Type::new("java.util", "List");
        assert_eq!(
            render_field("things", raw, &no_lens),
            "public final ListLens<HOST, Object, ObjectLens<HOST, Object>> things = createSubListLens(Car::things, SET, ObjectLens::of);"
        );
    }

    #[test]
    fn test_wildcard_element_is_made_exact() {
        let numbers = Type::new("java.util", "List")
            .with_generics([Type::new("java.lang", "Number").to_extends()]);
        assert_eq!(
            render_field("numbers", numbers, &no_lens),
            "public final ListLens<HOST, Number, ObjectLens<HOST, Number>> numbers = createSubListLens(Car::numbers, SET, ObjectLens::of);"
        );
    }

    #[test]
    fn test_lens_constants() {
        let car = Type::new("com.example", "Car");
        let mut builder = CodeBuilder::java();
        builder.emit(lens_constants(&car).as_slice());
        insta::assert_snapshot!(builder.build(), @r"
        public static final Car.CarLens<Car> theCar = new Car.CarLens<>(LensSpec.of(Car.class));
        public static final ListLens<List<Car>, Car, Car.CarLens<List<Car>>> eachCar = ListLens.of(Car.class, Car.CarLens::new);
        ");
    }

    #[test]
    fn test_lens_class() {
        let car = Type::new("com.example", "Car");
        let class = lens_class(&car, Vec::new());
        let mut builder = CodeBuilder::java();
        builder.emit(&class);
        insta::assert_snapshot!(builder.build(), @r"
        public static class CarLens<HOST> extends ObjectLensImpl<HOST, Car> {
            public CarLens(LensSpec<HOST, Car> spec) {
                super(spec);
            }
        }
        ");
    }
}
