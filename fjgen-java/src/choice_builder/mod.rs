//! Choice emission: turns a [`ChoiceSpec`] into an abstract Java class with
//! one nested final subclass per case.
//!
//! The outer class holds the case factories, the `Tag` enum, the per-case
//! views, the typed switch chain and the tagged map codec. Each case class
//! owns its fields, constructor validation, withers and per-case codec.

mod cases;
mod codec;
mod helpers;
mod switch;

use eyre::{Result, WrapErr};
use fjgen_codegen::builder::Lines;
use fjgen_ir::{Case, ChoiceSpec, Getter, Type};

use crate::{
    JavaFile,
    ast::{Accessibility, ClassSpec, DataObjectSpec, GenConstructor, GenField, GenMethod, Modifiability},
    lens::{self, LensProperty},
    runtime,
    struct_builder::pipeable_data,
};

fn tag_type(spec: &ChoiceSpec) -> Type {
    Type::nested(&spec.target_package, &spec.target_name, "Tag")
}

/// `ResultStatus.Tag.Accepted`.
fn tag_constant(spec: &ChoiceSpec, case: &Case) -> String {
    format!("{}.{}", tag_type(spec), case.name)
}

fn case_getters(case: &Case) -> Vec<Getter> {
    case.params.iter().map(|p| p.as_getter()).collect()
}

/// Builds the [`DataObjectSpec`] for one choice.
pub struct ChoiceBuilder<'a> {
    spec: &'a ChoiceSpec,
}

impl<'a> ChoiceBuilder<'a> {
    pub fn new(spec: &'a ChoiceSpec) -> Self {
        Self { spec }
    }

    /// Build and render the choice as one Java source file.
    pub fn emit(&self) -> Result<JavaFile> {
        DataObjectSpec::emit(|| self.build())
    }

    pub fn build(&self) -> Result<DataObjectSpec> {
        let spec = self.spec;
        spec.validate()
            .wrap_err_with(|| format!("cannot generate choice '{}'", spec.target_name))?;

        let target = spec.target_type();
        let _span = tracing::debug_span!("choice", name = %target.full_name()).entered();

        let mut class = ClassSpec::new(target.clone())
            .abstract_()
            .implements(runtime::i_choice(switch::first_switch_type(spec)))
            .implements(runtime::pipeable(target.clone()))
            .doc(format!(
                "Generated by fjgen from {{@link {}}}.",
                spec.spec_type().full_name()
            ));

        if spec.generate_lens {
            class = class.fields(lens::lens_constants(&target));
        }
        class = class
            .field(
                GenField::new(Type::string(), "toStringCache")
                    .modifiability(Modifiability::Volatile)
                    .value("null"),
            )
            .constructor(
                GenConstructor::new(&spec.target_name).accessibility(Accessibility::Private),
            )
            .methods(spec.cases.iter().map(|case| helpers::factory(spec, case)))
            .method(GenMethod::new(tag_type(spec), "__tag").abstract_())
            .method(
                GenMethod::new(runtime::map(Type::string(), Type::object()), "__toMap")
                    .abstract_(),
            )
            .method(
                GenMethod::new(Type::string(), "toCaseString")
                    .accessibility(Accessibility::Protected)
                    .abstract_(),
            )
            .method(pipeable_data(&target))
            .method(switch::match_method(spec))
            .methods(spec.cases.iter().flat_map(|case| helpers::case_views(spec, case)))
            .methods(codec::codec_methods(spec))
            .method(to_string())
            .inner_class(cases::tag_enum(spec));
        class = spec
            .cases
            .iter()
            .map(|case| cases::case_class(spec, case))
            .fold(class, ClassSpec::inner_class);
        if spec.generate_lens {
            class = class.inner_class(lens_class(spec));
        }
        class = switch::switch_classes(spec)
            .into_iter()
            .fold(class, ClassSpec::inner_class);

        tracing::debug!(cases = spec.cases.len(), "built choice");
        Ok(DataObjectSpec::new(&spec.target_package, spec.spec_type(), class))
    }
}

/// Read-only lens over the case views: `isX` and `asX` per case.
fn lens_class(spec: &ChoiceSpec) -> ClassSpec {
    let target = spec.target_type();
    let case_types: Vec<String> = spec
        .cases
        .iter()
        .map(|case| spec.case_type(case).full_name())
        .collect();
    let has_lens =
        |ty: &Type| spec.has_lens(ty) || case_types.contains(&ty.erasure().full_name());
    let boolean = Type::boolean();
    let views: Vec<(String, Type)> = spec
        .cases
        .iter()
        .flat_map(|case| {
            [
                (format!("is{}", case.name), boolean.clone()),
                (
                    format!("as{}", case.name),
                    runtime::result(spec.case_type(case)),
                ),
            ]
        })
        .collect();
    let fields = views
        .iter()
        .map(|(name, ty)| {
            let property = LensProperty {
                name,
                ty,
                getter: format!("{}::{}", target.simple_name(), name),
                setter: "(host, newValue) -> host".to_string(),
            };
            lens::sub_lens_field(&property, &has_lens)
        })
        .collect();
    lens::lens_class(&target, fields)
}

/// `toString` renders the case once and caches it.
fn to_string() -> GenMethod {
    GenMethod::new(Type::string(), "toString")
        .annotation("@Override")
        .body(Lines::of([
            Lines::line("String cached = toStringCache;"),
            Lines::line("if (cached != null)"),
            Lines::line("return cached;").indent(),
            Lines::line("synchronized (this) {"),
            Lines::of([
                Lines::line("if (toStringCache == null)"),
                Lines::line("toStringCache = toCaseString();").indent(),
                Lines::line("return toStringCache;"),
            ])
            .indent(),
            Lines::line("}"),
        ]))
}
