use super::*;

/// Classification of an anchor target relative to the article's own host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
  External { href: String },
  Internal,
}

impl Link {
  /// Decides whether `href` points inside `host`'s domain.
  ///
  /// The target hostname is compared as a plain string suffix, so subdomains
  /// count as internal and unrelated hosts sharing the suffix do too. The
  /// external href repairs the corpus's doubled percent signs (`%%` becomes
  /// `%`, one trailing `%` is dropped); embedded `%XX` escapes stay as they
  /// are.
  pub fn classify(href: &str, host: &str) -> Self {
    let target = re::HREF_SCHEME.replace(href, "");
    let target = re::HREF_PATH.replace(&target, "");

    if target.ends_with(host) {
      return Self::Internal;
    }

    let cleaned = href.replace("%%", "%");
    let cleaned = cleaned.strip_suffix('%').unwrap_or(&cleaned);

    Self::External {
      href: cleaned.to_string(),
    }
  }
}
