use super::*;

/// Rewrites one parsed html node into the canonical output tree.
///
/// Tag remapping runs for every element regardless of the whitelist; the
/// sanitizer is responsible for having removed disallowed markup before this
/// transform sees the tree. Anchors have their attributes replaced wholesale
/// by the link classification.
pub(crate) fn rewrite(
  source: ego_tree::NodeRef<'_, scraper::Node>,
  host: &str,
) -> Result<Node> {
  match source.value() {
    scraper::Node::Text(text) => Ok(Node::text(text.text.to_string())),
    scraper::Node::Element(element) => {
      let mut rewritten = Element::new(remap(element.name()));

      if rewritten.name == "a" {
        match Link::classify(element.attr("href").unwrap_or_default(), host) {
          Link::Internal => rewritten.set_attribute("type", "internal"),
          Link::External { href } => {
            rewritten.set_attribute("href", href);
            rewritten.set_attribute("type", "external");
          }
        }
      }

      for child in source.children() {
        rewritten.children.push(rewrite(child, host)?);
      }

      Ok(Node::Element(rewritten))
    }
    node => Err(Error::UnsupportedNode {
      node: format!("{node:?}"),
    }),
  }
}

fn remap(tag: &str) -> &str {
  if tag == "blockquote" { "q" } else { tag }
}
