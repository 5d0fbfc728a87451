//! Parser for the Java type expressions written in `fjgen.toml`.
//!
//! ```text
//! type     := name ( '<' arg ( ',' arg )* '>' )?
//! arg      := '?' ( ( 'extends' | 'super' ) type )? | type
//! name     := ident ( '.' ident )*
//! ```
//!
//! Resolution of simple names to packages happens later, when the manifest
//! is lowered; this module only checks the shape.

use std::{fmt, str::FromStr};

use fjgen_core::is_java_identifier;
use fjgen_ir::Variance;

/// A parsed, unresolved type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpr {
    /// Dotted name as written (`String`, `java.time.LocalDate`).
    pub name: String,
    pub args: Vec<TypeExpr>,
    pub variance: Variance,
}

/// Why a type expression could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExprError {
    /// Byte offset into the expression.
    pub offset: usize,
    pub reason: &'static str,
}

impl fmt::Display for TypeExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at column {})", self.reason, self.offset + 1)
    }
}

impl std::error::Error for TypeExprError {}

impl TypeExpr {
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            variance: Variance::Exact,
        }
    }

    pub fn parse(input: &str) -> Result<Self, TypeExprError> {
        let mut parser = Parser { input, pos: 0 };
        let ty = parser.parse_type()?;
        parser.skip_ws();
        if parser.pos < input.len() {
            return Err(parser.error("unexpected trailing characters"));
        }
        Ok(ty)
    }

    /// Whether the name carries its own package (`java.time.LocalDate`).
    pub fn is_qualified(&self) -> bool {
        self.name.contains('.')
    }

    /// Every name in the expression, outermost first.
    pub fn names(&self) -> Vec<&str> {
        let mut names = vec![self.name.as_str()];
        for arg in &self.args {
            names.extend(arg.names());
        }
        names
    }
}

impl FromStr for TypeExpr {
    type Err = TypeExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variance {
            Variance::Exact => {}
            Variance::Extends => write!(f, "? extends ")?,
            Variance::Super => write!(f, "? super ")?,
        }
        write!(f, "{}", self.name)?;
        if !self.args.is_empty() {
            let args: Vec<String> = self.args.iter().map(ToString::to_string).collect();
            write!(f, "<{}>", args.join(", "))?;
        }
        Ok(())
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn error(&self, reason: &'static str) -> TypeExprError {
        TypeExprError {
            offset: self.pos,
            reason,
        }
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn eat(&mut self, c: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn ident(&mut self) -> Result<&'a str, TypeExprError> {
        self.skip_ws();
        let start = self.pos;
        let len = self
            .rest()
            .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
            .unwrap_or(self.rest().len());
        if len == 0 {
            return Err(self.error("expected a type name"));
        }
        let input = self.input;
        let ident = &input[start..start + len];
        if is_java_identifier(ident).is_some() {
            return Err(self.error("type names cannot start with a digit"));
        }
        self.pos += len;
        Ok(ident)
    }

    fn parse_name(&mut self) -> Result<String, TypeExprError> {
        let mut name = self.ident()?.to_string();
        while self.peek() == Some('.') {
            self.pos += 1;
            name.push('.');
            name.push_str(self.ident()?);
        }
        Ok(name)
    }

    fn parse_type(&mut self) -> Result<TypeExpr, TypeExprError> {
        let name = self.parse_name()?;
        let mut args = Vec::new();
        if self.eat('<') {
            loop {
                args.push(self.parse_arg()?);
                if self.eat(',') {
                    continue;
                }
                if self.eat('>') {
                    break;
                }
                return Err(self.error("expected ',' or '>'"));
            }
        }
        Ok(TypeExpr {
            name,
            args,
            variance: Variance::Exact,
        })
    }

    fn parse_arg(&mut self) -> Result<TypeExpr, TypeExprError> {
        if !self.eat('?') {
            return self.parse_type();
        }
        self.skip_ws();
        let variance = if self.rest().starts_with("extends") {
            self.pos += "extends".len();
            Variance::Extends
        } else if self.rest().starts_with("super") {
            self.pos += "super".len();
            Variance::Super
        } else {
            // A bare wildcard is `? extends Object`.
            return Ok(TypeExpr {
                variance: Variance::Extends,
                ..TypeExpr::simple("Object")
            });
        };
        let bound = self.parse_type()?;
        Ok(TypeExpr { variance, ..bound })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let ty = TypeExpr::parse("String").unwrap();
        assert_eq!(ty, TypeExpr::simple("String"));
        assert!(!ty.is_qualified());
    }

    #[test]
    fn test_parse_qualified() {
        let ty = TypeExpr::parse(" java.time.LocalDate ").unwrap();
        assert_eq!(ty.name, "java.time.LocalDate");
        assert!(ty.is_qualified());
    }

    #[test]
    fn test_parse_generics() {
        let ty = TypeExpr::parse("Map<String, List<Integer>>").unwrap();
        assert_eq!(ty.name, "Map");
        assert_eq!(ty.args.len(), 2);
        assert_eq!(ty.args[1].args[0].name, "Integer");
        assert_eq!(ty.to_string(), "Map<String, List<Integer>>");
        assert_eq!(ty.names(), vec!["Map", "String", "List", "Integer"]);
    }

    #[test]
    fn test_parse_wildcards() {
        let ty = TypeExpr::parse("List<? extends Number>").unwrap();
        assert_eq!(ty.args[0].variance, Variance::Extends);
        assert_eq!(ty.args[0].name, "Number");

        let ty = TypeExpr::parse("List<?>").unwrap();
        assert_eq!(ty.to_string(), "List<? extends Object>");

        let ty = TypeExpr::parse("Comparator<? super Car>").unwrap();
        assert_eq!(ty.args[0].variance, Variance::Super);
    }

    #[test]
    fn test_parse_errors() {
        assert!(TypeExpr::parse("").is_err());
        assert!(TypeExpr::parse("List<String").is_err());
        assert!(TypeExpr::parse("List<>").is_err());
        assert!(TypeExpr::parse("String[]").is_err());
        assert!(TypeExpr::parse("1Car").is_err());

        let err = TypeExpr::parse("Map<String Integer>").unwrap_err();
        assert_eq!(err.reason, "expected ',' or '>'");
    }
}
