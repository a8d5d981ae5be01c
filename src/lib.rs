use {
  crate::{corpus::attribute_value, rewrite::rewrite},
  ego_tree::{NodeId, Tree},
  quick_xml::{
    Reader, Writer,
    escape::resolve_predefined_entity,
    events::{BytesEnd, BytesRef, BytesStart, BytesText, Event},
  },
  regex::Regex,
  scraper::{ElementRef, Html, Selector},
  std::{collections::HashMap, io, sync::LazyLock},
  url::Url,
};

pub use crate::{
  corpus::clean_corpus,
  error::Error,
  host_index::HostIndex,
  link::Link,
  node::{Element, Node},
  sanitizer::Sanitizer,
  whitelist::Whitelist,
};

mod corpus;
mod error;
mod host_index;
mod link;
mod node;
mod re;
mod rewrite;
mod sanitizer;
mod whitelist;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
