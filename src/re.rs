use super::*;

pub(crate) static HREF_PATH: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"/.*").unwrap());

pub(crate) static HREF_SCHEME: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^https?://").unwrap());
