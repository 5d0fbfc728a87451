//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! IR nodes produce fragments; only [`CodeBuilder`](super::CodeBuilder)
//! turns them into text, so indentation is decided in one place.

/// A piece of generated code, before indentation is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    Blank,
    /// A header line, an indented body, and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A Javadoc comment; one rendered line per input line.
    JavaDoc(String),
}

/// Trait for types that can be rendered to code fragments.
///
/// Implement this trait for IR nodes to render them through CodeBuilder.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable> Renderable for [T] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}
