//! Lower phase - transforms the manifest into declarations.
//!
//! Every struct and choice table becomes a [`SourceSpec`] or [`ChoiceSpec`]
//! with fully resolved [`Type`]s, which is what the generators consume.

use eyre::{Result, WrapErr, eyre};
use fjgen_ir::{
    Case, CaseParam, ChoiceSpec, Declarations, Getter, SourceSpec, Type, Variance,
};
use fjgen_manifest::{ChoiceDecl, FieldDecl, Manifest, StructDecl, TypeExpr};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that transforms the manifest into declarations.
///
/// Declarations that are already present (built through the API) are kept
/// untouched.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        if ctx.ir.is_some() {
            tracing::debug!("declarations already present, nothing to lower");
            return Ok(());
        }
        let manifest = ctx
            .manifest
            .as_ref()
            .ok_or_else(|| eyre!("no manifest or declarations to compile"))?;

        let ir = lower_manifest(manifest)?;
        tracing::debug!(
            structs = ir.structs.len(),
            choices = ir.choices.len(),
            "lowered manifest"
        );
        ctx.ir = Some(ir);
        Ok(())
    }
}

/// Lower a manifest into declarations.
///
/// Tables are visited in name order, so the output is deterministic.
pub fn lower_manifest(manifest: &Manifest) -> Result<Declarations> {
    let package = &manifest.package;
    let mut ir = Declarations::new();

    for (name, decl) in &manifest.structs {
        let spec = lower_struct(name, decl, &package.name, package.spec_package())
            .wrap_err_with(|| format!("in struct '{}'", name))?;
        ir.structs.push(spec);
    }
    for (name, decl) in &manifest.choices {
        let spec = lower_choice(name, decl, &package.name, package.spec_package())
            .wrap_err_with(|| format!("in choice '{}'", name))?;
        ir.choices.push(spec);
    }
    Ok(ir)
}

fn lower_struct(
    name: &str,
    decl: &StructDecl,
    package: &str,
    spec_package: &str,
) -> Result<SourceSpec> {
    let spec_name = decl.spec.clone().unwrap_or_else(|| format!("{}Def", name));
    let getters = decl
        .fields
        .iter()
        .map(|field| lower_field(field, package))
        .collect::<Result<Vec<_>>>()?;

    Ok(SourceSpec::new(package, name)
        .spec(spec_package, spec_name)
        .source_kind(decl.source_kind)
        .config(decl.config.clone())
        .getters(getters))
}

fn lower_choice(
    name: &str,
    decl: &ChoiceDecl,
    package: &str,
    spec_package: &str,
) -> Result<ChoiceSpec> {
    let spec_name = decl.spec.clone().unwrap_or_else(|| format!("{}Spec", name));
    let mut spec = ChoiceSpec::new(package, name)
        .spec(spec_package, spec_name)
        .generate_lens(decl.generate_lens);

    for case_decl in &decl.cases {
        let mut case = Case::new(&case_decl.name);
        for param in &case_decl.params {
            let getter = lower_field(param, package)?;
            case = case.param(CaseParam {
                name: getter.name,
                ty: getter.ty,
                nullable: getter.nullable,
                default_value: getter.default_value,
            });
        }
        spec = spec.case(case);
    }
    Ok(spec)
}

fn lower_field(field: &FieldDecl, package: &str) -> Result<Getter> {
    let expr = TypeExpr::parse(&field.ty)
        .map_err(|e| eyre!("invalid type '{}' for '{}': {}", field.ty, field.name, e))?;

    Ok(Getter {
        name: field.name.clone(),
        ty: resolve_type(&expr, package),
        nullable: field.nullable,
        default_value: field.default_value().unwrap_or_default(),
    })
}

/// Resolve a parsed type expression.
///
/// Qualified names are taken as written; simple names go through the
/// well-known table and otherwise land in `package` (which is where declared
/// structs and choices live).
pub fn resolve_type(expr: &TypeExpr, package: &str) -> Type {
    let base = if expr.is_qualified() {
        Type::of(&expr.name)
    } else {
        Type::well_known(&expr.name).unwrap_or_else(|| Type::new(package, &expr.name))
    };

    let ty = if expr.args.is_empty() {
        base
    } else {
        base.with_generics(expr.args.iter().map(|arg| resolve_type(arg, package)))
    };

    match expr.variance {
        Variance::Exact => ty,
        Variance::Extends => ty.to_extends(),
        Variance::Super => ty.to_super(),
    }
}

#[cfg(test)]
mod tests {
    use fjgen_ir::{DefaultValue, SourceKind};

    use super::*;

    fn parse_manifest(content: &str) -> Manifest {
        content.parse().expect("Failed to parse test manifest")
    }

    fn make_test_manifest() -> Manifest {
        parse_manifest(
            r#"
            [package]
            name = "com.example"
            spec-package = "com.example.spec"

            [structs.Car]
            source-kind = "class"
            fields = [
                { name = "make", type = "String" },
                { name = "year", type = "int" },
                { name = "color", type = "String", nullable = true, default = "null" },
                { name = "owners", type = "List<Person>" },
            ]

            [structs.Person]
            spec = "PersonModel"
            fields = [{ name = "name", type = "String" }]

            [choices.ResultStatus]
            cases = [
                { name = "Accepted", params = [{ name = "newData", type = "String" }] },
                { name = "Failed", params = [{ name = "problem", type = "Exception" }] },
            ]
        "#,
        )
    }

    #[test]
    fn test_lower_phase() {
        let mut ctx = CompilationContext::new(make_test_manifest());

        assert!(ctx.ir.is_none());

        LowerPhase.run(&mut ctx).expect("lower should succeed");

        let ir = ctx.ir.as_ref().unwrap();
        assert_eq!(ir.structs.len(), 2);
        assert_eq!(ir.choices.len(), 1);
    }

    #[test]
    fn test_lower_struct() {
        let ir = lower_manifest(&make_test_manifest()).unwrap();
        let car = &ir.structs[0];

        assert_eq!(car.target_name, "Car");
        assert_eq!(car.target_package, "com.example");
        assert_eq!(car.spec_name, "CarDef");
        assert_eq!(car.spec_package, "com.example.spec");
        assert_eq!(car.source_kind, SourceKind::Class);
        assert_eq!(car.getters[1].ty, Type::int());
        assert!(car.getters[2].nullable);
        assert_eq!(car.getters[2].default_value, DefaultValue::Null);
        assert_eq!(
            car.getters[3].ty.to_string(),
            "List<Person>"
        );
        assert_eq!(
            car.getters[3].ty.type_arg(0).map(Type::full_name).as_deref(),
            Some("com.example.Person")
        );

        assert_eq!(ir.structs[1].spec_name, "PersonModel");
    }

    #[test]
    fn test_lower_choice() {
        let ir = lower_manifest(&make_test_manifest()).unwrap();
        let choice = &ir.choices[0];

        assert_eq!(choice.spec_name, "ResultStatusSpec");
        assert_eq!(choice.cases.len(), 2);
        assert_eq!(choice.cases[0].params[0].name, "newData");
        assert_eq!(
            choice.cases[1].params[0].ty.full_name(),
            "java.lang.Exception"
        );
    }

    #[test]
    fn test_resolve_type() {
        let resolve = |s: &str| resolve_type(&TypeExpr::parse(s).unwrap(), "com.example");

        assert_eq!(resolve("java.time.LocalDate").full_name(), "java.time.LocalDate");
        assert_eq!(resolve("Widget").full_name(), "com.example.Widget");
        assert_eq!(
            resolve("Map<String, ? extends Number>").to_string(),
            "Map<String, ? extends Number>"
        );
        assert_eq!(resolve("FuncList<Integer>").full_name(), "functionalj.list.FuncList");
        assert!(resolve("boolean").is_primitive());
    }

    #[test]
    fn test_existing_ir_is_kept() {
        let ir = Declarations::new().with_struct(SourceSpec::new("com.other", "Point"));
        let mut ctx = CompilationContext::from_ir(ir.clone());

        LowerPhase.run(&mut ctx).expect("lower should succeed");

        assert_eq!(ctx.ir, Some(ir));
    }
}
