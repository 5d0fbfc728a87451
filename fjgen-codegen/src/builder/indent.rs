//! Indentation unit for generated sources.

/// One level of indentation.
///
/// Java sources use four spaces per nesting level; blank lines never carry
/// indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    pub const JAVA: Self = Self("    ");

    /// Prefix `text` with `depth` units, leaving empty lines empty.
    pub fn apply(&self, depth: usize, text: &str) -> String {
        if text.is_empty() {
            String::new()
        } else {
            format!("{}{}", self.0.repeat(depth), text)
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_nests_units() {
        assert_eq!(Indent::JAVA.apply(0, "a();"), "a();");
        assert_eq!(Indent::JAVA.apply(2, "a();"), "        a();");
    }

    #[test]
    fn test_blank_line_stays_empty() {
        assert_eq!(Indent::JAVA.apply(3, ""), "");
    }
}
