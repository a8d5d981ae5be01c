use super::*;

/// Maps article ids to the host of their canonical url, built once from the
/// ground-truth corpus and read-only afterwards.
#[derive(Debug, Default)]
pub struct HostIndex {
  hosts: HashMap<String, String>,
}

impl HostIndex {
  /// Builds the index from a ground-truth document of `article` elements
  /// carrying `id` and `url` attributes. A url that does not parse, or
  /// parses without a host, aborts the whole build.
  pub fn parse(xml: &str) -> Result<Self> {
    let mut reader = Reader::from_str(xml);
    let mut hosts = HashMap::new();

    loop {
      match reader.read_event()? {
        Event::Start(element) | Event::Empty(element)
          if element.name().as_ref() == b"article" =>
        {
          let id = attribute_value(&element, "id")?.unwrap_or_default();
          let url = attribute_value(&element, "url")?.unwrap_or_default();

          hosts.insert(id, host_of(&url)?);
        }
        Event::Eof => break,
        _ => {}
      }
    }

    Ok(Self { hosts })
  }

  pub fn get(&self, id: &str) -> Result<&str> {
    self
      .hosts
      .get(id)
      .map(String::as_str)
      .ok_or_else(|| Error::UnknownArticle { id: id.to_string() })
  }

  pub fn len(&self) -> usize {
    self.hosts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.hosts.is_empty()
  }
}

fn host_of(url: &str) -> Result<String> {
  let parsed = Url::parse(url).map_err(|source| Error::MalformedUrl {
    url: url.to_string(),
    source,
  })?;

  parsed
    .host_str()
    .map(str::to_owned)
    .ok_or_else(|| Error::MissingHost {
      url: url.to_string(),
    })
}
