use super::*;

/// Two-pass whitelist sanitizer for one article's raw markup.
///
/// A single whole-document pass is not enough: markup nested inside an
/// already-allowed element can itself contain disallowed structure, so every
/// allowed element first has its inner markup cleaned in place, and the
/// whole document is then cleaned once more end to end before the rewrite.
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
  whitelist: Whitelist,
}

impl Sanitizer {
  pub fn new(whitelist: Whitelist) -> Self {
    Self { whitelist }
  }

  /// Cleans one article's raw html and rewrites it into the canonical tree,
  /// returning the sequence of top-level nodes.
  pub fn sanitize(&self, html: &str, host: &str) -> Result<Vec<Node>> {
    let mut document = Html::parse_document(html);

    self.scrub_allowed_elements(&mut document)?;

    let cleaned = self.clean(&document.html());
    let fragment = Html::parse_fragment(&cleaned);

    fragment
      .root_element()
      .children()
      .map(|child| rewrite(child, host))
      .collect()
  }

  /// Whitelist-cleans a markup string: disallowed elements are unwrapped in
  /// place, raw-text containers and comments are dropped entirely, and
  /// attributes outside the whitelist are stripped.
  fn clean(&self, markup: &str) -> String {
    let mut fragment = Html::parse_fragment(markup);

    self.scrub(&mut fragment);

    fragment.root_element().inner_html()
  }

  /// Replaces the inner markup of every allowed element currently in the
  /// document with its cleaned form.
  fn scrub_allowed_elements(&self, document: &mut Html) -> Result {
    for tag in self.whitelist.tags() {
      let selector = Selector::parse(tag)
        .map_err(|error| Error::InvalidSelector(error.to_string()))?;

      let ids: Vec<NodeId> = document
        .select(&selector)
        .map(|element| element.id())
        .collect();

      for id in ids {
        let Some(inner) = document
          .tree
          .get(id)
          .and_then(ElementRef::wrap)
          .map(|element| element.inner_html())
        else {
          continue;
        };

        let cleaned = self.clean(&inner);

        replace_children(&mut document.tree, id, &Html::parse_fragment(&cleaned));
      }
    }

    Ok(())
  }

  fn scrub(&self, html: &mut Html) {
    let mut to_detach = Vec::new();
    let mut to_unwrap = Vec::new();
    let mut to_strip = Vec::new();

    for node in html.root_element().descendants().skip(1) {
      match node.value() {
        scraper::Node::Element(element) => {
          let tag = element.name();

          if !self.whitelist.is_tag_allowed(tag) {
            if is_raw_text(tag) {
              to_detach.push(node.id());
            } else {
              to_unwrap.push(node.id());
            }
          } else if element
            .attrs()
            .any(|(name, _)| !self.whitelist.is_attribute_allowed(tag, name))
          {
            to_strip.push(node.id());
          }
        }
        scraper::Node::Text(_) => {}
        _ => to_detach.push(node.id()),
      }
    }

    for id in to_detach {
      if let Some(mut node) = html.tree.get_mut(id) {
        node.detach();
      }
    }

    // document order guarantees parents are unwrapped before their children
    for id in to_unwrap {
      unwrap_element(&mut html.tree, id);
    }

    for id in to_strip {
      self.strip_attributes(&mut html.tree, id);
    }
  }

  fn strip_attributes(&self, tree: &mut Tree<scraper::Node>, id: NodeId) {
    if let Some(mut node) = tree.get_mut(id)
      && let scraper::Node::Element(element) = node.value()
    {
      let tag = element.name().to_string();

      element
        .attrs
        .retain(|(name, _)| self.whitelist.is_attribute_allowed(&tag, &name.local));
    }
  }
}

fn is_raw_text(tag: &str) -> bool {
  matches!(tag, "script" | "style")
}

/// Drops an element's tag while keeping its children in place.
fn unwrap_element(tree: &mut Tree<scraper::Node>, id: NodeId) {
  let children: Vec<NodeId> = match tree.get(id) {
    Some(node) => node.children().map(|child| child.id()).collect(),
    None => return,
  };

  if let Some(mut node) = tree.get_mut(id) {
    for child in children {
      node.insert_id_before(child);
    }

    node.detach();
  }
}

fn replace_children(
  tree: &mut Tree<scraper::Node>,
  id: NodeId,
  replacement: &Html,
) {
  if let Some(mut node) = tree.get_mut(id) {
    while let Some(mut child) = node.first_child() {
      child.detach();
    }
  }

  graft(tree, id, *replacement.root_element());
}

/// Deep-copies the children of `source` (a node of another tree) under
/// `parent`.
fn graft(
  tree: &mut Tree<scraper::Node>,
  parent: NodeId,
  source: ego_tree::NodeRef<'_, scraper::Node>,
) {
  for child in source.children() {
    let id = match tree.get_mut(parent) {
      Some(mut node) => node.append(child.value().clone()).id(),
      None => return,
    };

    graft(tree, id, child);
  }
}
