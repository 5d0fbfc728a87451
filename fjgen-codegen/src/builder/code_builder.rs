//! Text sink that turns code fragments into indented Java source.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates rendered lines, tracking the current nesting depth.
///
/// ```
/// use fjgen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::java();
/// builder.apply_fragment(CodeFragment::Block {
///     header: "public int year() {".to_string(),
///     body: vec![CodeFragment::Line("return year;".to_string())],
///     close: Some("}".to_string()),
/// });
/// assert_eq!(builder.build(), "public int year() {\n    return year;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// A builder with 4-space indentation.
    pub fn java() -> Self {
        Self::default()
    }

    /// Add a line at the current depth; empty lines carry no indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        let line = self.indent.apply(self.depth, s);
        self.buffer.push_str(&line);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Render every fragment of `node` in order.
    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.nested(body);
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::Indent(fragments) => self.nested(fragments),
            CodeFragment::JavaDoc(text) => self.java_doc(&text),
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn nested(&mut self, fragments: Vec<CodeFragment>) {
        self.depth += 1;
        for fragment in fragments {
            self.apply_fragment(fragment);
        }
        self.depth -= 1;
    }

    /// Single-line `/** ... */` when the text has one line.
    fn java_doc(&mut self, text: &str) {
        let lines: Vec<&str> = text.lines().collect();
        if let [single] = lines.as_slice() {
            self.push_line(&format!("/** {} */", single));
            return;
        }
        self.push_line("/**");
        for line in lines {
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {}", line));
            }
        }
        self.push_line(" */");
    }
}
