#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("invalid selector: {0}")]
  InvalidSelector(String),
  #[error("failed to write cleaned corpus: {source}")]
  Io {
    #[from]
    source: std::io::Error,
  },
  #[error("malformed article url `{url}`: {source}")]
  MalformedUrl { url: String, source: url::ParseError },
  #[error("failed to read corpus xml: {source}")]
  MalformedXml {
    #[from]
    source: quick_xml::Error,
  },
  #[error("article url `{url}` has no host")]
  MissingHost { url: String },
  #[error("article element is missing its end tag")]
  UnclosedArticle,
  #[error("unknown article id: {id}")]
  UnknownArticle { id: String },
  #[error("unresolvable entity reference `&{name};`")]
  UnknownEntity { name: String },
  #[error("unsupported markup node: {node}")]
  UnsupportedNode { node: String },
}
