mod error;
mod token;

pub use self::error::ParseError;
use self::token::ElementSink;
use crate::element::Element;
use html5ever::{
    tendril::StrTendril,
    TokenizerResult,
    tokenizer::{BufferQueue, Tokenizer, TokenizerOpts},
};
use log::{debug, trace};
use std::io::Read;

/// HTML parser options.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParserOptions {
    max_input_size: Option<usize>,
}

impl ParserOptions {
    /// Creates parser options.
    pub const fn new() -> Self {
        Self {
            max_input_size: None,
        }
    }

    /// Returns a maximum input size in bytes.
    pub const fn max_input_size(&self) -> Option<usize> {
        self.max_input_size
    }

    /// Sets a maximum input size in bytes.
    pub const fn set_max_input_size(mut self, size: Option<usize>) -> Self {
        self.max_input_size = size;
        self
    }
}

/// An HTML parser.
///
/// The parser drives an HTML5 tokenizer over a whole document and collects an
/// element for every start tag in document order. End tags, text, comments,
/// and document type declarations are skipped.
///
/// Invalid UTF-8 sequences are replaced with `U+FFFD`.
#[derive(Clone, Debug, Default)]
pub struct HtmlParser {
    options: ParserOptions,
}

impl HtmlParser {
    /// Creates an HTML parser.
    pub const fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Returns parser options.
    pub const fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses an HTML document into elements.
    pub fn parse(&self, reader: impl Read) -> Result<Vec<Element>, ParseError> {
        let input = self.read(reader)?;

        trace!("tokenizing {} bytes", input.len());

        let tokenizer = Tokenizer::new(ElementSink::default(), TokenizerOpts::default());
        let queue = BufferQueue::default();
        queue.push_back(input);
        // The sink never suspends the tokenizer for scripts.
        while let TokenizerResult::Script(()) = tokenizer.feed(&queue) {}
        tokenizer.end();

        let elements = tokenizer.sink.take_elements();

        debug!("extracted {} elements", elements.len());

        Ok(elements)
    }

    fn read(&self, mut reader: impl Read) -> Result<StrTendril, ParseError> {
        let mut bytes = vec![];

        if let Some(size) = self.options.max_input_size() {
            reader
                .take((size as u64).saturating_add(1))
                .read_to_end(&mut bytes)?;

            if bytes.len() > size {
                return Err(ParseError::new(format!("input larger than {size} bytes")));
            }
        } else {
            reader.read_to_end(&mut bytes)?;
        }

        Ok(String::from_utf8_lossy(&bytes).into_owned().into())
    }
}
