//! Snapshot tests for whole generated Java files.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use fjgen_ir::{Case, CaseParam, ChoiceSpec, DefaultValue, Getter, SourceSpec, Type};
use fjgen_java::{ChoiceBuilder, StructBuilder};

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

fn result_status() -> ChoiceSpec {
    ChoiceSpec::new("com.example", "ResultStatus")
        .case(Case::new("Accepted").param(CaseParam::new("newData", Type::string())))
        .case(
            Case::new("Failed").param(CaseParam::new("problem", Type::of("java.lang.Exception"))),
        )
}

#[test]
fn test_car_source() {
    let source = StructBuilder::new(&car())
        .emit()
        .expect("Car should generate")
        .render();
    insta::assert_snapshot!("car_source", source);
}

#[test]
fn test_result_status_source() {
    let source = ChoiceBuilder::new(&result_status())
        .emit()
        .expect("ResultStatus should generate")
        .render();
    insta::assert_snapshot!("result_status_source", source);
}
