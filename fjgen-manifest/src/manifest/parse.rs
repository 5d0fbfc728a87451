//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, FieldDecl, Problem, Result, TypeExpr};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "fjgen.toml")
    }
}

impl Manifest {
    /// Parse a fjgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a fjgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = ParseContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_manifest(&manifest, &ctx)?;
    Ok(manifest)
}

/// Validate names and type expressions after parsing.
///
/// Conventions (camel case, default policies, duplicates) are reported later
/// by the pipeline lints; this only rejects what cannot be generated at all.
fn validate_manifest(manifest: &Manifest, ctx: &ParseContext<'_>) -> Result<()> {
    ctx.validate_dotted_name(&manifest.package.name, "package")?;
    ctx.validate_dotted_name(manifest.package.spec_package(), "spec package")?;

    for (name, decl) in &manifest.structs {
        ctx.validate_name(name, "struct")?;
        if let Some(spec) = &decl.spec {
            ctx.validate_dotted_name(spec, "spec")?;
        }
        let struct_ctx = ctx.push(name);
        for field in &decl.fields {
            validate_field(&struct_ctx, field, "field")?;
        }
    }

    for (name, decl) in &manifest.choices {
        ctx.validate_name(name, "choice")?;
        if manifest.structs.contains_key(name) {
            return Err(ctx.reject(
                Problem::Invalid(format!(
                    "'{}' is declared both as a struct and as a choice",
                    name
                )),
                ctx.find_span(name),
            ));
        }
        if let Some(spec) = &decl.spec {
            ctx.validate_dotted_name(spec, "spec")?;
        }
        let choice_ctx = ctx.push(name);
        for case in &decl.cases {
            choice_ctx.validate_name(&case.name, "case")?;
            let case_ctx = choice_ctx.push(&case.name);
            for param in &case.params {
                validate_field(&case_ctx, param, "parameter")?;
            }
        }
    }
    Ok(())
}

fn validate_field(ctx: &ParseContext<'_>, field: &FieldDecl, kind: &str) -> Result<()> {
    ctx.validate_name(&field.name, kind)?;

    TypeExpr::parse(&field.ty).map_err(|e| {
        ctx.reject(
            Problem::InvalidType {
                ty: field.ty.clone(),
                owner: format!("{} '{}' in '{}'", kind, field.name, ctx.path_string()),
                reason: e.to_string(),
            },
            ctx.find_value_span(&field.ty),
        )
    })?;

    if field.default_value().is_none() {
        return Err(ctx.reject(
            Problem::Invalid(format!(
                "default of {} '{}' in '{}' must be a string, number or boolean",
                kind,
                field.name,
                ctx.path_string()
            )),
            ctx.find_span(&field.name),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAR: &str = r#"
[package]
name = "com.example"

[structs.Car]
fields = [
    { name = "make", type = "String" },
    { name = "year", type = "int" },
    { name = "color", type = "String", nullable = true, default = "null" },
]

[choices.ResultStatus]
cases = [
    { name = "Accepted", params = [{ name = "newData", type = "String" }] },
    { name = "Pending" },
]
"#;

    #[test]
    fn test_parse_manifest() {
        let manifest: Manifest = CAR.parse().unwrap();
        assert_eq!(manifest.package.name, "com.example");
        assert_eq!(manifest.package.spec_package(), "com.example");
        assert_eq!(manifest.structs["Car"].fields.len(), 3);
        assert_eq!(manifest.choices["ResultStatus"].cases[1].params.len(), 0);
        assert!(manifest.has_type("ResultStatus"));
        assert_eq!(
            manifest.type_names().collect::<Vec<_>>(),
            vec!["Car", "ResultStatus"]
        );
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = "[package]\nname = ".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let src = "[package]\nname = \"com.example\"\n[structs.Car]\nfeilds = []\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_keyword_field_rejected() {
        let src = r#"
[package]
name = "com.example"

[structs.Car]
fields = [{ name = "class", type = "String" }]
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(
            err.problem(),
            Some(Problem::ReservedKeyword { context, .. }) if context == "field in 'Car'"
        ));
    }

    #[test]
    fn test_invalid_package_rejected() {
        let err = "[package]\nname = \"com.1example\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(err.problem(), Some(Problem::InvalidIdentifier { .. })));
    }

    #[test]
    fn test_invalid_type_rejected() {
        let src = r#"
[package]
name = "com.example"

[structs.Car]
fields = [{ name = "tags", type = "List<String" }]
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::Declaration {
                span,
                problem: Problem::InvalidType { ty, owner, .. },
                ..
            } => {
                assert_eq!(ty, "List<String");
                assert_eq!(owner, "field 'tags' in 'Car'");
                assert!(span.is_some());
            }
            other => panic!("expected InvalidType, got {:?}", other),
        }
    }

    #[test]
    fn test_struct_and_choice_collision_rejected() {
        let src = r#"
[package]
name = "com.example"

[structs.Status]
fields = []

[choices.Status]
cases = [{ name = "On" }]
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("both as a struct and as a choice"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fjgen.toml");
        std::fs::write(&path, CAR).unwrap();
        let manifest = Manifest::from_file(&path).unwrap();
        assert!(manifest.structs.contains_key("Car"));

        let err = Manifest::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
