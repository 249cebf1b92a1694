use crate::{element::Element, node_kind::NodeKind};
use core::cell::RefCell;
use html5ever::tokenizer::{Tag, TagKind, Token, TokenSink, TokenSinkResult, states::RawKind};
use log::trace;

impl From<&Token> for NodeKind {
    fn from(token: &Token) -> Self {
        match token {
            Token::TagToken(_) => Self::Element,
            Token::CharacterTokens(_) | Token::NullCharacterToken => Self::Text,
            Token::CommentToken(_) => Self::Comment,
            Token::DoctypeToken(_) => Self::Doctype,
            _ => Self::Error,
        }
    }
}

/// A token sink collecting elements from start tags.
#[derive(Debug, Default)]
pub struct ElementSink {
    elements: RefCell<Vec<Element>>,
}

impl ElementSink {
    pub fn take_elements(&self) -> Vec<Element> {
        self.elements.take()
    }

    // Contents of raw text elements are never tokenized as markup, even after
    // self-closing start tags.
    fn content_state(tag: &Tag) -> TokenSinkResult<()> {
        match &*tag.name {
            "script" => TokenSinkResult::RawData(RawKind::ScriptData),
            "style" | "xmp" | "iframe" | "noembed" | "noframes" | "noscript" => {
                TokenSinkResult::RawData(RawKind::Rawtext)
            }
            "title" | "textarea" => TokenSinkResult::RawData(RawKind::Rcdata),
            "plaintext" => TokenSinkResult::Plaintext,
            _ => TokenSinkResult::Continue,
        }
    }
}

impl TokenSink for ElementSink {
    type Handle = ();

    fn process_token(&self, token: Token, line_number: u64) -> TokenSinkResult<()> {
        match (NodeKind::from(&token), token) {
            (NodeKind::Element, Token::TagToken(tag)) if tag.kind == TagKind::StartTag => {
                let state = Self::content_state(&tag);

                self.elements.borrow_mut().push(Element::new(
                    NodeKind::Element,
                    tag.name.to_string(),
                    tag.attrs
                        .iter()
                        .map(|attribute| {
                            (
                                attribute.name.local.to_string(),
                                attribute.value.to_string(),
                            )
                        })
                        .collect(),
                ));

                return state;
            }
            (NodeKind::Error, Token::ParseError(error)) => {
                trace!("recovered from malformed markup at line {line_number}: {error}");
            }
            _ => {}
        }

        TokenSinkResult::Continue
    }
}
