#![doc = include_str!("../README.md")]

extern crate alloc;

mod config;
mod element;
mod error;
mod filter;
mod html_parser;
mod http_client;
mod node_kind;
mod predicate;
mod projection;
mod render;

pub use self::{
    config::*,
    element::Element,
    error::Error,
    filter::{filter, filter_elements, filter_with},
    html_parser::{HtmlParser, ParseError, ParserOptions},
    http_client::{BareHttpClient, BareResponse, HttpClient, HttpClientError, ReqwestHttpClient},
    node_kind::NodeKind,
    predicate::Predicate,
    projection::{images, images_with, links, links_with},
    render::{RenderFormat, RenderOptions, render_elements, render_values},
};
