//! Composable line sequences for method and constructor bodies.

use std::{fmt, sync::Arc};

use super::{CodeBuilder, CodeFragment, Indent, Renderable};

type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;
type Producer = Arc<dyn Fn() -> Lines + Send + Sync>;

/// A lazy, restartable sequence of source lines.
///
/// Values are cheap to clone and never consumed by rendering: the same
/// `Lines` can be iterated or rendered any number of times with the same
/// result. Content built with [`Lines::lazy`] is produced at render time.
///
/// ```
/// use fjgen_codegen::builder::Lines;
///
/// let body = Lines::of([
///     Lines::line("if (x) {"),
///     Lines::line("return 1;").indent(),
///     Lines::line("}"),
/// ]);
/// assert_eq!(body.to_vec(), vec!["if (x) {", "    return 1;", "}"]);
/// ```
#[derive(Clone, Default)]
pub struct Lines(Node);

#[derive(Clone, Default)]
enum Node {
    #[default]
    Empty,
    Line(String),
    Seq(Vec<Lines>),
    Indent(Box<Lines>),
    Filter(Box<Lines>, Predicate),
    Lazy(Producer),
}

impl Lines {
    pub fn empty() -> Self {
        Self(Node::Empty)
    }

    /// A single literal line.
    pub fn line(s: impl Into<String>) -> Self {
        Self(Node::Line(s.into()))
    }

    /// Several literal lines, in order.
    pub fn lines<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self::of(lines.into_iter().map(|s| Self::line(s)))
    }

    /// Concatenate anything convertible to lines; `None` entries are dropped.
    pub fn of<L: Into<Lines>>(items: impl IntoIterator<Item = L>) -> Self {
        Self(Node::Seq(items.into_iter().map(Into::into).collect()))
    }

    /// Defer producing the lines until they are rendered.
    pub fn lazy(producer: impl Fn() -> Lines + Send + Sync + 'static) -> Self {
        Self(Node::Lazy(Arc::new(producer)))
    }

    /// Prefix every line with one indentation unit.
    pub fn indent(self) -> Self {
        Self(Node::Indent(Box::new(self)))
    }

    /// Keep only the lines (by unindented text) that satisfy `keep`.
    pub fn filter(self, keep: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self(Node::Filter(Box::new(self), Arc::new(keep)))
    }

    /// These lines followed by `other`.
    pub fn then(self, other: impl Into<Lines>) -> Self {
        Self::of([self, other.into()])
    }

    /// Every line as `(depth, text)`, in order.
    fn entries(&self) -> Vec<(usize, String)> {
        let mut out = Vec::new();
        self.collect_into(0, &|_: &str| true, &mut out);
        out
    }

    fn collect_into(
        &self,
        depth: usize,
        keep: &dyn Fn(&str) -> bool,
        out: &mut Vec<(usize, String)>,
    ) {
        match &self.0 {
            Node::Empty => {}
            Node::Line(s) => {
                if keep(s) {
                    out.push((depth, s.clone()));
                }
            }
            Node::Seq(items) => {
                for item in items {
                    item.collect_into(depth, keep, out);
                }
            }
            Node::Indent(inner) => inner.collect_into(depth + 1, keep, out),
            Node::Filter(inner, predicate) => {
                inner.collect_into(depth, &|s: &str| keep(s) && predicate(s), out)
            }
            Node::Lazy(producer) => producer().collect_into(depth, keep, out),
        }
    }

    /// Iterate the rendered lines, indentation included.
    pub fn iter(&self) -> impl Iterator<Item = String> + use<> {
        self.entries()
            .into_iter()
            .map(|(depth, text)| Indent::JAVA.apply(depth, &text))
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }
}

impl Renderable for Lines {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.entries()
            .into_iter()
            .map(|(depth, text)| {
                (0..depth).fold(CodeFragment::Line(text), |fragment, _| {
                    CodeFragment::Indent(vec![fragment])
                })
            })
            .collect()
    }
}

impl fmt::Display for Lines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        f.write_str(&builder.build())
    }
}

impl fmt::Debug for Lines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for Lines {
    fn eq(&self, other: &Self) -> bool {
        self.entries() == other.entries()
    }
}

impl From<String> for Lines {
    fn from(s: String) -> Self {
        Self::line(s)
    }
}

impl From<&str> for Lines {
    fn from(s: &str) -> Self {
        Self::line(s)
    }
}

impl<T: Into<Lines>> From<Option<T>> for Lines {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl<T: Into<Lines>> From<Vec<T>> for Lines {
    fn from(items: Vec<T>) -> Self {
        Self::of(items)
    }
}
