use crate::node_kind::NodeKind;
use serde::Serialize;

/// An element in an HTML document.
///
/// Elements are extracted from start tags and never modified afterwards. They
/// do not know about their parents or children.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Element {
    kind: NodeKind,
    tag: String,
    attributes: Vec<(String, String)>,
}

impl Element {
    /// Creates an element.
    pub const fn new(kind: NodeKind, tag: String, attributes: Vec<(String, String)>) -> Self {
        Self {
            kind,
            tag,
            attributes,
        }
    }

    /// Returns a node kind.
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns a tag name.
    #[allow(clippy::missing_const_for_fn)]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns attributes in their order of appearance.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns the value of the first attribute with a key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes()
            .find_map(|(name, value)| (name == key).then_some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keep_duplicate_attributes() {
        let element = Element::new(
            NodeKind::Element,
            "a".into(),
            vec![
                ("href".into(), "/foo".into()),
                ("class".into(), "link".into()),
                ("href".into(), "/bar".into()),
            ],
        );

        assert_eq!(
            element.attributes().collect::<Vec<_>>(),
            vec![("href", "/foo"), ("class", "link"), ("href", "/bar")]
        );
    }

    #[test]
    fn get_first_attribute() {
        let element = Element::new(
            NodeKind::Element,
            "a".into(),
            vec![("href".into(), "/foo".into()), ("href".into(), "/bar".into())],
        );

        assert_eq!(element.attribute("href"), Some("/foo"));
        assert_eq!(element.attribute("src"), None);
    }

    #[test]
    fn serialize() {
        assert_eq!(
            serde_json::to_string(&Element::new(
                NodeKind::Element,
                "img".into(),
                vec![("src".into(), "cat.jpeg".into())],
            ))
            .unwrap(),
            r#"{"kind":"element","tag":"img","attributes":[["src","cat.jpeg"]]}"#
        );
    }
}
