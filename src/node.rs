use super::*;

/// A node of the cleaned markup tree that replaces an article's body.
///
/// Ownership is strictly tree shaped; elements own their children and no
/// node refers back to its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  Element(Element),
  Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
  pub name: String,
  pub attributes: Vec<(String, String)>,
  pub children: Vec<Node>,
}

impl Node {
  pub fn text(content: impl Into<String>) -> Self {
    Self::Text(content.into())
  }

  /// Emits this subtree as xml events; text and attribute values are
  /// escaped by the writer.
  pub fn write_into<W: io::Write>(&self, writer: &mut Writer<W>) -> Result {
    match self {
      Self::Text(content) => {
        writer.write_event(Event::Text(BytesText::new(content)))?;
      }
      Self::Element(element) => element.write_into(writer)?,
    }

    Ok(())
  }

  pub fn to_xml(&self) -> Result<String> {
    let mut writer = Writer::new(Vec::new());

    self.write_into(&mut writer)?;

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
  }
}

impl Element {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      attributes: Vec::new(),
      children: Vec::new(),
    }
  }

  pub fn set_attribute(
    &mut self,
    name: impl Into<String>,
    value: impl Into<String>,
  ) {
    self.attributes.push((name.into(), value.into()));
  }

  fn write_into<W: io::Write>(&self, writer: &mut Writer<W>) -> Result {
    let mut start = BytesStart::new(self.name.as_str());

    for (name, value) in &self.attributes {
      start.push_attribute((name.as_str(), value.as_str()));
    }

    writer.write_event(Event::Start(start))?;

    for child in &self.children {
      child.write_into(writer)?;
    }

    writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;

    Ok(())
  }
}
