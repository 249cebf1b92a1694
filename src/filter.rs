use crate::{
    element::Element,
    html_parser::{HtmlParser, ParseError},
    predicate::Predicate,
};
use log::debug;
use std::io::Read;

/// Filters elements in an HTML document.
///
/// All predicates must match for an element to be kept, and kept elements are
/// in document order. No predicate keeps every element.
pub fn filter(reader: impl Read, predicates: &[Predicate]) -> Result<Vec<Element>, ParseError> {
    filter_with(&HtmlParser::default(), reader, predicates)
}

/// Filters elements in an HTML document with a parser.
pub fn filter_with(
    parser: &HtmlParser,
    reader: impl Read,
    predicates: &[Predicate],
) -> Result<Vec<Element>, ParseError> {
    Ok(filter_elements(parser.parse(reader)?, predicates))
}

/// Filters parsed elements.
pub fn filter_elements(elements: Vec<Element>, predicates: &[Predicate]) -> Vec<Element> {
    if predicates.is_empty() {
        return elements;
    }

    let count = elements.len();
    let elements = elements
        .into_iter()
        .filter(|element| {
            predicates
                .iter()
                .all(|predicate| predicate.matches(element))
        })
        .collect::<Vec<_>>();

    debug!("kept {} of {count} elements", elements.len());

    elements
}
