//! Instance fields and their accessors.

use fjgen_ir::SourceSpec;

use crate::ast::{Accessibility, GenField, GenMethod};

pub(super) fn fields(spec: &SourceSpec) -> Vec<GenField> {
    let accessibility = if spec.config.public_fields {
        Accessibility::Public
    } else {
        Accessibility::Private
    };
    spec.getters
        .iter()
        .map(|getter| GenField::new(getter.ty.clone(), &getter.name).accessibility(accessibility))
        .collect()
}

pub(super) fn accessors(spec: &SourceSpec) -> Vec<GenMethod> {
    spec.getters
        .iter()
        .map(|getter| {
            GenMethod::new(getter.ty.clone(), &getter.name)
                .body(format!("return {};", getter.name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use fjgen_codegen::builder::CodeBuilder;
    use fjgen_ir::{Configurations, Getter, Type};

    use super::*;

    fn car() -> SourceSpec {
        SourceSpec::new("com.example", "Car")
            .getter(Getter::new("make", Type::string()))
            .getter(Getter::new("year", Type::int()))
    }

    #[test]
    fn test_private_fields_by_default() {
        let mut builder = CodeBuilder::java();
        builder.emit(fields(&car()).as_slice());
        assert_eq!(
            builder.build(),
            "private final String make;\nprivate final int year;\n"
        );
    }

    #[test]
    fn test_public_fields_option() {
        let spec = car().config(Configurations {
            public_fields: true,
            ..Configurations::default()
        });
        assert!(
            fields(&spec)
                .iter()
                .all(|f| f.accessibility == Accessibility::Public)
        );
    }

    #[test]
    fn test_accessor_returns_field() {
        let mut builder = CodeBuilder::java();
        builder.emit(accessors(&car()).as_slice());
        insta::assert_snapshot!(builder.build(), @r"
        public String make() {
            return make;
        }
        public int year() {
            return year;
        }
        ");
    }
}
