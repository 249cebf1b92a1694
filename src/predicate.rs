use crate::{element::Element, node_kind::NodeKind};

const CLASS_ATTRIBUTE: &str = "class";
const ID_ATTRIBUTE: &str = "id";

/// A predicate on elements.
///
/// Class and ID predicates match attribute values containing a given string
/// rather than whitespace-separated tokens. For example, `home link` matches
/// both `home` and `ink`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Predicate {
    /// Matches elements with a tag name.
    Tag(String),
    /// Matches elements with a class attribute containing a string.
    Class(String),
    /// Matches elements with an ID attribute containing a string.
    Id(String),
    /// Matches elements with an attribute of a key.
    Attribute(String),
}

impl Predicate {
    /// Creates a tag predicate, or returns `None` if the name is empty.
    ///
    /// The name is lowercased as tag names of parsed elements are.
    pub fn tag(name: impl Into<String>) -> Option<Self> {
        non_empty(name.into()).map(|name| Self::Tag(name.to_lowercase()))
    }

    /// Creates a class predicate, or returns `None` if the class is empty.
    pub fn class(class: impl Into<String>) -> Option<Self> {
        non_empty(class.into()).map(Self::Class)
    }

    /// Creates an ID predicate, or returns `None` if the ID is empty.
    pub fn id(id: impl Into<String>) -> Option<Self> {
        non_empty(id.into()).map(Self::Id)
    }

    /// Creates an attribute predicate, or returns `None` if the key is empty.
    pub fn attribute(key: impl Into<String>) -> Option<Self> {
        non_empty(key.into()).map(Self::Attribute)
    }

    /// Returns `true` if an element matches the predicate.
    pub fn matches(&self, element: &Element) -> bool {
        element.kind() == NodeKind::Element
            && match self {
                Self::Tag(name) => element.tag() == name,
                Self::Class(class) => contains(element, CLASS_ATTRIBUTE, class),
                Self::Id(id) => contains(element, ID_ATTRIBUTE, id),
                Self::Attribute(key) => element.attributes().any(|(name, _)| name == key),
            }
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn contains(element: &Element, key: &str, pattern: &str) -> bool {
    element
        .attributes()
        .any(|(name, value)| name == key && value.contains(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn element(tag: &str, attributes: &[(&str, &str)]) -> Element {
        Element::new(
            NodeKind::Element,
            tag.into(),
            attributes
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    #[test]
    fn ignore_empty_arguments() {
        assert_eq!(Predicate::tag(""), None);
        assert_eq!(Predicate::class(""), None);
        assert_eq!(Predicate::id(""), None);
        assert_eq!(Predicate::attribute(""), None);
    }

    #[test]
    fn lowercase_tag_names() {
        assert_eq!(Predicate::tag("H1"), Some(Predicate::Tag("h1".into())));
    }

    #[test]
    fn match_tag() {
        let predicate = Predicate::Tag("a".into());

        assert!(predicate.matches(&element("a", &[])));
        assert!(!predicate.matches(&element("abbr", &[])));
        assert!(!Predicate::Tag("A".into()).matches(&element("a", &[])));
    }

    #[test]
    fn match_class_substring() {
        let element = element("a", &[("class", "home link")]);

        assert!(Predicate::Class("link".into()).matches(&element));
        assert!(Predicate::Class("home".into()).matches(&element));
        assert!(Predicate::Class("ome li".into()).matches(&element));
        assert!(!Predicate::Class("nav".into()).matches(&element));
    }

    #[test]
    fn match_class_on_class_attribute_only() {
        assert!(!Predicate::Class("link".into()).matches(&element("a", &[("id", "link")])));
    }

    #[test]
    fn match_id_substring() {
        let element = element("h1", &[("id", "title")]);

        assert!(Predicate::Id("title".into()).matches(&element));
        assert!(Predicate::Id("tit".into()).matches(&element));
        assert!(!Predicate::Id("header".into()).matches(&element));
        assert!(!Predicate::Id("title".into()).matches(&self::element("h1", &[])));
    }

    #[test]
    fn match_any_duplicate_attribute() {
        let element = element("a", &[("class", "foo"), ("class", "bar")]);

        assert!(Predicate::Class("foo".into()).matches(&element));
        assert!(Predicate::Class("bar".into()).matches(&element));
    }

    #[test]
    fn match_attribute_presence() {
        let predicate = Predicate::Attribute("href".into());

        assert!(predicate.matches(&element("a", &[("href", "")])));
        assert!(predicate.matches(&element("link", &[("rel", "icon"), ("href", "/")])));
        assert!(!predicate.matches(&element("img", &[("src", "/")])));
    }

    #[test]
    fn reject_non_element_nodes() {
        let node = Element::new(NodeKind::Text, "a".into(), vec![("href".into(), "/".into())]);

        assert!(!Predicate::Tag("a".into()).matches(&node));
        assert!(!Predicate::Attribute("href".into()).matches(&node));
    }
}
