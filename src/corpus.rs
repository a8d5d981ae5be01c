use super::*;

/// Streams the article corpus to `output`, replacing each `article`
/// element's raw html text with its cleaned markup tree. Everything outside
/// the articles passes through unchanged.
pub fn clean_corpus<W: io::Write>(
  xml: &str,
  hosts: &HostIndex,
  sanitizer: &Sanitizer,
  output: W,
) -> Result {
  let mut reader = Reader::from_str(xml);
  let mut writer = Writer::new(output);

  loop {
    match reader.read_event()? {
      Event::Start(element) if element.name().as_ref() == b"article" => {
        let id = attribute_value(&element, "id")?.unwrap_or_default();
        let host = hosts.get(&id)?;

        writer.write_event(Event::Start(element))?;

        let content = read_article_text(&mut reader)?;

        for node in sanitizer.sanitize(&content, host)? {
          node.write_into(&mut writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new("article")))?;
      }
      Event::Empty(element) if element.name().as_ref() == b"article" => {
        let id = attribute_value(&element, "id")?.unwrap_or_default();

        hosts.get(&id)?;

        writer.write_event(Event::Empty(element))?;
      }
      Event::Eof => break,
      event => writer.write_event(event)?,
    }
  }

  Ok(())
}

/// Collects the text content of the current `article` element, the way a
/// dom text lookup would: all text, cdata, and entity-reference descendants
/// concatenated, any nested markup ignored.
fn read_article_text(reader: &mut Reader<&[u8]>) -> Result<String> {
  let mut content = String::new();
  let mut depth = 0usize;

  loop {
    match reader.read_event()? {
      Event::Start(_) => depth += 1,
      Event::End(_) => {
        if depth == 0 {
          break;
        }

        depth -= 1;
      }
      Event::Text(text) => {
        content.push_str(&text.decode().map_err(quick_xml::Error::from)?);
      }
      Event::GeneralRef(reference) => {
        content.push_str(&resolve_reference(&reference)?);
      }
      Event::CData(data) => {
        content.push_str(&String::from_utf8_lossy(&data.into_inner()));
      }
      Event::Eof => return Err(Error::UnclosedArticle),
      _ => {}
    }
  }

  Ok(content)
}

/// Resolves a character or predefined entity reference to the text it
/// stands for.
fn resolve_reference(reference: &BytesRef) -> Result<String> {
  if let Some(character) = reference
    .resolve_char_ref()
    .map_err(quick_xml::Error::from)?
  {
    return Ok(character.to_string());
  }

  let name = String::from_utf8_lossy(reference);

  resolve_predefined_entity(&name)
    .map(str::to_owned)
    .ok_or_else(|| Error::UnknownEntity {
      name: name.into_owned(),
    })
}

pub(crate) fn attribute_value(
  element: &BytesStart,
  name: &str,
) -> Result<Option<String>> {
  for attribute in element.attributes().flatten() {
    if attribute.key.as_ref() == name.as_bytes() {
      let value = attribute
        .unescape_value()
        .map_err(quick_xml::Error::from)?;

      return Ok(Some(value.into_owned()));
    }
  }

  Ok(None)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn clean(ground_truth: &str, articles: &str) -> Result<String> {
    let hosts = HostIndex::parse(ground_truth)?;
    let sanitizer = Sanitizer::default();
    let mut output = Vec::new();

    clean_corpus(articles, &hosts, &sanitizer, &mut output)?;

    Ok(String::from_utf8_lossy(&output).into_owned())
  }

  const GROUND_TRUTH: &str = concat!(
    r#"<articles>"#,
    r#"<article id="a1" url="http://example.com/story/1"/>"#,
    r#"</articles>"#,
  );

  #[test]
  fn replaces_article_text_with_cleaned_markup() {
    let articles = concat!(
      r#"<articles><article id="a1">"#,
      "&lt;p&gt;Visit &lt;a href=\"http://other.org/x\"&gt;here&lt;/a&gt;&lt;/p&gt;",
      r#"</article></articles>"#,
    );

    assert_eq!(
      clean(GROUND_TRUTH, articles).unwrap(),
      concat!(
        r#"<articles><article id="a1">"#,
        r#"<p>Visit <a href="http://other.org/x" type="external">here</a></p>"#,
        r#"</article></articles>"#,
      )
    );
  }

  #[test]
  fn resolves_entity_references_in_article_text() {
    let articles = concat!(
      r#"<articles><article id="a1">"#,
      "&lt;p&gt;A &amp;amp; B &#169;&lt;/p&gt;",
      r#"</article></articles>"#,
    );

    assert_eq!(
      clean(GROUND_TRUTH, articles).unwrap(),
      concat!(
        r#"<articles><article id="a1">"#,
        "<p>A &amp; B \u{a9}</p>",
        r#"</article></articles>"#,
      )
    );
  }

  #[test]
  fn attribute_values_are_unescaped() {
    let mut reader = Reader::from_str(r#"<article id="a&amp;b"/>"#);

    let Ok(Event::Empty(element)) = reader.read_event() else {
      panic!("expected an empty article element");
    };

    assert_eq!(
      attribute_value(&element, "id").unwrap(),
      Some("a&b".to_string())
    );
  }

  #[test]
  fn passes_surrounding_markup_through_unchanged() {
    let articles = concat!(
      r#"<?xml version="1.0" encoding="UTF-8"?>"#,
      r#"<articles note="kept"><!-- corpus -->"#,
      r#"<article id="a1">&lt;p&gt;ok&lt;/p&gt;</article>"#,
      r#"</articles>"#,
    );

    assert_eq!(
      clean(GROUND_TRUTH, articles).unwrap(),
      concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        r#"<articles note="kept"><!-- corpus -->"#,
        r#"<article id="a1"><p>ok</p></article>"#,
        r#"</articles>"#,
      )
    );
  }

  #[test]
  fn empty_articles_still_require_a_known_host() {
    let articles = r#"<articles><article id="a1"/></articles>"#;

    assert_eq!(
      clean(GROUND_TRUTH, articles).unwrap(),
      r#"<articles><article id="a1"/></articles>"#
    );

    let unknown = r#"<articles><article id="nope"/></articles>"#;

    assert!(matches!(
      clean(GROUND_TRUTH, unknown),
      Err(Error::UnknownArticle { .. })
    ));
  }

  #[test]
  fn unknown_article_id_aborts_the_run() {
    let articles =
      r#"<articles><article id="mystery">&lt;p&gt;x&lt;/p&gt;</article></articles>"#;

    assert!(matches!(
      clean(GROUND_TRUTH, articles),
      Err(Error::UnknownArticle { .. })
    ));
  }
}
