//! Info command report.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use serde::Serialize;

use super::console::{Console, Report};

/// What a manifest declares and what generation will produce.
#[derive(Debug, Serialize)]
pub struct InfoReport {
    /// Package of the generated classes.
    pub package: String,
    /// Package of the declaring spec types.
    pub spec_package: String,
    pub config_path: PathBuf,
    pub stats: Stats,
    /// Full names of declared structs.
    pub structs: Vec<String>,
    /// Full names of declared choices.
    pub choices: Vec<String>,
    /// Output files, relative to the source root.
    pub files: Vec<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct Stats {
    pub structs: usize,
    pub choices: usize,
    /// Struct fields plus case parameters.
    pub fields: usize,
    pub cases: usize,
    pub builders: usize,
    pub lenses: usize,
}

impl Report for InfoReport {
    fn render<O: Write, E: Write>(&self, console: &mut Console<O, E>) -> io::Result<()> {
        console.heading(&self.package)?;
        if self.spec_package != self.package {
            console.row("Specs", &self.spec_package)?;
        }
        console.row("Config", self.config_path.display())?;
        console.blank()?;

        console.heading("Statistics")?;
        console.row("Structs", self.stats.structs)?;
        console.row(
            "Choices",
            format_args!("{} ({} cases)", self.stats.choices, self.stats.cases),
        )?;
        console.row("Fields", self.stats.fields)?;
        console.row("Builders", self.stats.builders)?;
        console.row("Lenses", self.stats.lenses)?;

        if !self.files.is_empty() {
            console.blank()?;
            console.heading("Files")?;
            for file in &self.files {
                console.line(format_args!("  {}", file))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::render_to_strings;

    fn report() -> InfoReport {
        InfoReport {
            package: "com.example".into(),
            spec_package: "com.example".into(),
            config_path: PathBuf::from("fjgen.toml"),
            stats: Stats {
                structs: 1,
                choices: 1,
                fields: 3,
                cases: 2,
                builders: 1,
                lenses: 2,
            },
            structs: vec!["com.example.Car".into()],
            choices: vec!["com.example.Light".into()],
            files: vec!["com/example/Car.java".into(), "com/example/Light.java".into()],
        }
    }

    #[test]
    fn test_render() {
        let (out, err) = render_to_strings(&report());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[..3],
            ["  com.example", "  ───────────", "  Config      fjgen.toml"]
        );
        assert!(lines.contains(&"  Choices     1 (2 cases)"));
        assert!(lines.contains(&"  Fields      3"));
        assert_eq!(lines.last(), Some(&"  com/example/Light.java"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_render_shows_distinct_spec_package() {
        let mut report = report();
        report.spec_package = "com.example.spec".into();
        let (out, _) = render_to_strings(&report);
        assert_eq!(out.lines().nth(2), Some("  Specs       com.example.spec"));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["package"], "com.example");
        assert_eq!(json["stats"]["cases"], 2);
        assert_eq!(json["files"][1], "com/example/Light.java");
    }
}
