use super::*;

const ALLOWED_TAGS: &[&str] = &["a", "p", "q", "blockquote"];

const ALLOWED_ANCHOR_ATTRIBUTES: &[&str] = &["href", "type"];

/// The markup policy every cleaned article is reduced to. Constructed once
/// and passed explicitly to whoever enforces it.
#[derive(Debug, Clone)]
pub struct Whitelist {
  tags: Vec<&'static str>,
  attributes: HashMap<&'static str, &'static [&'static str]>,
}

impl Default for Whitelist {
  fn default() -> Self {
    Self {
      tags: ALLOWED_TAGS.to_vec(),
      attributes: HashMap::from([("a", ALLOWED_ANCHOR_ATTRIBUTES)]),
    }
  }
}

impl Whitelist {
  pub fn allowed_attributes(&self, tag: &str) -> &[&str] {
    self.attributes.get(tag).copied().unwrap_or_default()
  }

  pub fn is_attribute_allowed(&self, tag: &str, attribute: &str) -> bool {
    self.allowed_attributes(tag).contains(&attribute)
  }

  pub fn is_tag_allowed(&self, tag: &str) -> bool {
    self.tags.contains(&tag)
  }

  pub(crate) fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.tags.iter().copied()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn allows_the_restricted_tag_set() {
    let whitelist = Whitelist::default();

    for tag in ["a", "p", "q", "blockquote"] {
      assert!(whitelist.is_tag_allowed(tag));
    }

    assert!(!whitelist.is_tag_allowed("script"));
    assert!(!whitelist.is_tag_allowed("div"));
  }

  #[test]
  fn only_anchors_carry_attributes() {
    let whitelist = Whitelist::default();

    assert!(whitelist.is_attribute_allowed("a", "href"));
    assert!(whitelist.is_attribute_allowed("a", "type"));
    assert!(!whitelist.is_attribute_allowed("a", "onclick"));
    assert!(!whitelist.is_attribute_allowed("p", "class"));
    assert!(whitelist.allowed_attributes("p").is_empty());
  }

  #[test]
  fn lists_tags_in_declaration_order() {
    let whitelist = Whitelist::default();

    assert_eq!(
      whitelist.tags().collect::<Vec<&str>>(),
      vec!["a", "p", "q", "blockquote"]
    );
  }
}
