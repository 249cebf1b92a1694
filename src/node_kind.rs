use serde::Serialize;

/// A kind of markup nodes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// An element from a start, end, or self-closing tag.
    Element,
    /// Character data.
    Text,
    /// A comment.
    Comment,
    /// A document type declaration.
    Doctype,
    /// Anything else.
    Error,
}
