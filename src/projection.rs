use crate::{
    filter::filter_with,
    html_parser::{HtmlParser, ParseError},
    predicate::Predicate,
};
use std::io::Read;

const LINK_ATTRIBUTE: &str = "href";
const IMAGE_ATTRIBUTE: &str = "src";

/// Extracts link targets from `href` attributes in an HTML document.
pub fn links(reader: impl Read) -> Result<Vec<String>, ParseError> {
    links_with(&HtmlParser::default(), reader)
}

/// Extracts link targets with a parser.
pub fn links_with(parser: &HtmlParser, reader: impl Read) -> Result<Vec<String>, ParseError> {
    project(parser, reader, LINK_ATTRIBUTE)
}

/// Extracts image sources from `src` attributes in an HTML document.
pub fn images(reader: impl Read) -> Result<Vec<String>, ParseError> {
    images_with(&HtmlParser::default(), reader)
}

/// Extracts image sources with a parser.
pub fn images_with(parser: &HtmlParser, reader: impl Read) -> Result<Vec<String>, ParseError> {
    project(parser, reader, IMAGE_ATTRIBUTE)
}

// Only the first attribute of the key is taken from each element.
fn project(parser: &HtmlParser, reader: impl Read, key: &str) -> Result<Vec<String>, ParseError> {
    Ok(
        filter_with(parser, reader, &[Predicate::Attribute(key.into())])?
            .iter()
            .filter_map(|element| element.attribute(key))
            .map(ToOwned::to_owned)
            .collect(),
    )
}
