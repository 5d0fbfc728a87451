//! Computed data from declaration analysis.
//!
//! [`ComputedData`] holds results derived once from the lowered
//! [`Declarations`] so that phases, generators and the CLI do not recompute
//! them.

use std::collections::BTreeSet;

use fjgen_ir::Declarations;
use serde::Serialize;

use crate::language::JAVA_NAMING;

/// Pre-computed data from declaration analysis.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ComputedData {
    /// Full names of every declared type that generates a lens.
    pub lens_types: BTreeSet<String>,
    /// Full names of declared structs, in declaration order.
    pub struct_names: Vec<String>,
    /// Full names of declared choices, in declaration order.
    pub choice_names: Vec<String>,
    /// Output files relative to the output directory (e.g. `com/example/Car.java`).
    pub files: Vec<String>,
    /// Struct fields plus choice case parameters.
    pub field_count: usize,
    /// Cases across all choices.
    pub case_count: usize,
    /// Structs that emit a staged builder.
    pub builder_count: usize,
}

impl ComputedData {
    /// Compute all data from the declarations.
    pub fn from_ir(ir: &Declarations) -> Self {
        let lens_types = lens_types(ir);

        let struct_names: Vec<String> = ir
            .structs
            .iter()
            .map(|s| s.target_type().full_name())
            .collect();
        let choice_names: Vec<String> = ir
            .choices
            .iter()
            .map(|c| c.target_type().full_name())
            .collect();

        let files = ir
            .structs
            .iter()
            .map(|s| (s.target_package.as_str(), s.target_name.as_str()))
            .chain(
                ir.choices
                    .iter()
                    .map(|c| (c.target_package.as_str(), c.target_name.as_str())),
            )
            .map(|(package, name)| {
                format!(
                    "{}/{}",
                    JAVA_NAMING.package_path(package),
                    JAVA_NAMING.file_name(name)
                )
            })
            .collect();

        let field_count = ir.structs.iter().map(|s| s.getters.len()).sum::<usize>()
            + ir
                .choices
                .iter()
                .flat_map(|c| &c.cases)
                .map(|case| case.params.len())
                .sum::<usize>();

        let case_count = ir.choices.iter().map(|c| c.cases.len()).sum();
        let builder_count = ir
            .structs
            .iter()
            .filter(|s| s.config.generate_builder)
            .count();

        Self {
            lens_types,
            struct_names,
            choice_names,
            files,
            field_count,
            case_count,
            builder_count,
        }
    }

    /// Number of generated top-level types.
    pub fn type_count(&self) -> usize {
        self.struct_names.len() + self.choice_names.len()
    }
}

/// Full names of declared types whose generated class carries a lens.
pub fn lens_types(ir: &Declarations) -> BTreeSet<String> {
    let structs = ir
        .structs
        .iter()
        .filter(|s| s.config.generate_lens)
        .map(|s| s.target_type().full_name());
    let choices = ir
        .choices
        .iter()
        .filter(|c| c.generate_lens)
        .map(|c| c.target_type().full_name());
    structs.chain(choices).collect()
}
