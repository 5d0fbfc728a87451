//! Shared string helpers for Java code generation.

/// Upper-case the first character (e.g., "make" -> "Make").
///
/// Used to derive `withMake`, `isAccepted` and similar member names.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character (e.g., "Accepted" -> "accepted").
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "result_status" -> "ResultStatus").
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

/// Convert a string to lowerCamelCase (e.g., "new_data" -> "newData").
pub fn to_camel_case(s: &str) -> String {
    decapitalize(&to_pascal_case(s))
}

/// Check whether `name` is syntactically a Java identifier.
///
/// Returns `None` when valid, or the reason it is not. Keywords are checked
/// separately by the naming conventions.
pub fn is_java_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("identifier cannot be empty"),
        Some(c) if c.is_ascii_digit() => return Some("identifier cannot start with a digit"),
        Some(c) if !(c.is_alphabetic() || c == '_' || c == '$') => {
            return Some("identifier must start with a letter, '_' or '$'");
        }
        Some(_) => {}
    }
    if chars.any(|c| !(c.is_alphanumeric() || c == '_' || c == '$')) {
        return Some("identifier contains invalid characters");
    }
    None
}

/// Quote `s` as a Java string literal.
pub fn java_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("make"), "Make");
        assert_eq!(capitalize("newData"), "NewData");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_decapitalize() {
        assert_eq!(decapitalize("Accepted"), "accepted");
        assert_eq!(decapitalize("URL"), "uRL");
        assert_eq!(decapitalize(""), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("result_status"), "ResultStatus");
        assert_eq!(to_pascal_case("result-status"), "ResultStatus");
        assert_eq!(to_pascal_case("Car"), "Car");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("new_data"), "newData");
        assert_eq!(to_camel_case("Problem"), "problem");
    }

    #[test]
    fn test_is_java_identifier() {
        assert_eq!(is_java_identifier("make"), None);
        assert_eq!(is_java_identifier("$value"), None);
        assert_eq!(is_java_identifier("_x1"), None);
        assert!(is_java_identifier("").is_some());
        assert!(is_java_identifier("1st").is_some());
        assert!(is_java_identifier("new-data").is_some());
    }

    #[test]
    fn test_java_string_literal() {
        assert_eq!(java_string_literal("Accepted"), "\"Accepted\"");
        assert_eq!(java_string_literal("a\"b"), "\"a\\\"b\"");
        assert_eq!(java_string_literal("a\\b\n"), "\"a\\\\b\\n\"");
    }
}
