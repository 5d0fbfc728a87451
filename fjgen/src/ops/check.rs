//! Check operation - manifest validation.

use std::path::Path;

use eyre::{Context, Result};
use fjgen_codegen::pipeline::{Pipeline, Severity};
use fjgen_manifest::Manifest;

use crate::reports::CheckReport;

/// Runs the pipeline to validate the manifest and returns its diagnostics.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let ctx = Pipeline::new()
        .run(manifest.clone())
        .wrap_err("Validation failed")?;

    let mut report = CheckReport {
        config_path: config_path.to_path_buf(),
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    for diag in &ctx.diagnostics {
        match diag.severity {
            Severity::Error => report.errors.push(diag.detail()),
            Severity::Warning => report.warnings.push(diag.detail()),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn run(src: &str) -> CheckReport {
        let manifest: Manifest = src.parse().unwrap();
        check(&manifest, &PathBuf::from("fjgen.toml")).unwrap()
    }

    #[test]
    fn test_valid_manifest() {
        let report = run(r#"
[package]
name = "com.example"

[structs.Car]
fields = [{ name = "make", type = "String" }]
"#);
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_empty_choice_is_an_error() {
        let report = run(r#"
[package]
name = "com.example"

[choices.Light]
cases = []
"#);
        assert!(!report.is_valid());
        assert_eq!(
            report.errors,
            vec!["choice 'Light' declares no cases\n  --> choices.Light"]
        );
    }

    #[test]
    fn test_fieldless_struct_is_a_warning() {
        let report = run(r#"
[package]
name = "com.example"

[structs.Marker]
fields = []
"#);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }
}
