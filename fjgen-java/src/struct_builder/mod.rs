//! Struct emission: turns a [`SourceSpec`] into an immutable Java class.
//!
//! The generated class carries, in order: lens constants, fields,
//! constructors, accessors, withers, the map codec, object methods, the
//! nested lens class and the staged builder.

mod builder_class;
mod codec;
mod constructors;
mod fields;
mod object_methods;
mod withers;

use eyre::{Result, WrapErr};
use fjgen_core::capitalize;
use fjgen_ir::{SourceKind, SourceSpec, Type};

pub(crate) use constructors::assignment;
pub(crate) use object_methods::{equals_body, hash_code_body, pipeable_data, to_string_expression};
pub(crate) use withers::copy_args;

use crate::{
    JavaFile,
    ast::{ClassSpec, DataObjectSpec},
    lens::{self, LensProperty},
    runtime,
};

/// Builds the [`DataObjectSpec`] for one struct.
pub struct StructBuilder<'a> {
    spec: &'a SourceSpec,
}

impl<'a> StructBuilder<'a> {
    pub fn new(spec: &'a SourceSpec) -> Self {
        Self { spec }
    }

    /// Build and render the struct as one Java source file.
    pub fn emit(&self) -> Result<JavaFile> {
        DataObjectSpec::emit(|| self.build())
    }

    /// Validate the spec and assemble the class.
    pub fn build(&self) -> Result<DataObjectSpec> {
        let spec = self.spec;
        spec.validate()
            .wrap_err_with(|| format!("cannot generate struct '{}'", spec.target_name))?;

        let target = spec.target_type();
        let _span = tracing::debug_span!("struct", name = %target.full_name()).entered();

        let mut class = supertypes(spec, ClassSpec::new(target.clone()).final_()).doc(format!(
            "Generated by fjgen from {{@link {}}}.",
            spec.spec_type().full_name()
        ));

        if spec.config.generate_lens {
            class = class.fields(lens::lens_constants(&target));
        }
        class = class.fields(fields::fields(spec));
        class = constructors::constructors(spec)
            .into_iter()
            .fold(class, ClassSpec::constructor);
        class = class
            .methods(fields::accessors(spec))
            .methods(withers::withers(spec))
            .methods(codec::codec_methods(spec))
            .methods(object_methods::object_methods(spec));

        if spec.config.generate_lens {
            class = class.inner_class(lens_class(spec));
        }
        if spec.config.generate_builder {
            class = class
                .method(builder_class::builder_method(spec))
                .inner_class(builder_class::builder_class(spec));
        }

        tracing::debug!(
            fields = spec.getters.len(),
            constructors = class.constructors.len(),
            methods = class.methods.len(),
            "built struct"
        );
        Ok(DataObjectSpec::new(
            &spec.target_package,
            spec.spec_type(),
            class,
        ))
    }
}

/// `extends`/`implements` the definition, plus `IStruct` and `Pipeable<Self>`.
fn supertypes(spec: &SourceSpec, class: ClassSpec) -> ClassSpec {
    let class = match (spec.config.couple_with_definition, spec.source_kind) {
        (false, _) => class,
        (true, SourceKind::Class) => class.extends(spec.spec_type()),
        (true, SourceKind::Interface) => class.implements(spec.spec_type()),
    };
    class
        .implements(runtime::i_struct())
        .implements(runtime::pipeable(spec.target_type()))
}

fn lens_class(spec: &SourceSpec) -> ClassSpec {
    let target = spec.target_type();
    let has_lens = |ty: &Type| spec.has_lens(ty);
    let fields = spec
        .getters
        .iter()
        .map(|g| {
            let property = LensProperty {
                name: &g.name,
                ty: &g.ty,
                getter: format!("{}::{}", target.simple_name(), g.name),
                setter: format!(
                    "(host, newValue) -> host.with{}(newValue)",
                    capitalize(&g.name)
                ),
            };
            lens::sub_lens_field(&property, &has_lens)
        })
        .collect();
    lens::lens_class(&target, fields)
}
