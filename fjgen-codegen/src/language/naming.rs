//! Naming conventions for generated sources.

use fjgen_core::{to_camel_case, to_pascal_case};
use fjgen_manifest::JAVA_KEYWORDS;

/// Language-specific naming conventions.
///
/// Defines how declared names become type, file and member names, and how
/// reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a declared name to a type name (e.g., "result_status" -> "ResultStatus")
    pub to_type: fn(&str) -> String,
    /// Transform a declared name to a member name (e.g., "new_data" -> "newData")
    pub to_member: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "class_")
    pub escape_reserved: fn(&str) -> String,
    /// Source file extension without the dot
    pub extension: &'static str,
}

/// Java conventions: PascalCase types, lowerCamelCase members, one file per top-level type.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    to_type: to_pascal_case,
    to_member: to_camel_case,
    reserved_words: JAVA_KEYWORDS,
    escape_reserved: escape_with_underscore,
    extension: "java",
};

fn escape_with_underscore(name: &str) -> String {
    format!("{}_", name)
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.to_type)(name);
        self.safe_name(&transformed)
    }

    pub fn member_name(&self, name: &str) -> String {
        let transformed = (self.to_member)(name);
        self.safe_name(&transformed)
    }

    /// File name for a top-level type (e.g., "Car" -> "Car.java").
    pub fn file_name(&self, type_name: &str) -> String {
        format!("{}.{}", type_name, self.extension)
    }

    /// Directory path for a dotted package (e.g., "com.example" -> "com/example").
    pub fn package_path(&self, package: &str) -> String {
        package.split('.').collect::<Vec<_>>().join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_type_and_member_names() {
        assert_eq!(JAVA_NAMING.type_name("result_status"), "ResultStatus");
        assert_eq!(JAVA_NAMING.member_name("new_data"), "newData");
        assert_eq!(JAVA_NAMING.member_name("Make"), "make");
    }

    #[test]
    fn test_reserved_words_are_escaped() {
        assert!(JAVA_NAMING.is_reserved("class"));
        assert_eq!(JAVA_NAMING.member_name("class"), "class_");
        assert_eq!(JAVA_NAMING.safe_name("make"), "make");
    }

    #[test]
    fn test_file_layout() {
        assert_eq!(JAVA_NAMING.file_name("Car"), "Car.java");
        assert_eq!(JAVA_NAMING.package_path("com.example.model"), "com/example/model");
    }
}
