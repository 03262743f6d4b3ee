use std::collections::BTreeMap;

/// Join the media base URL and an asset path.
///
/// Absolute paths are returned unchanged and exactly one `/` separates the two parts, so
/// `static_url("/media/", "img/a.png")` and `static_url("/media", "img/a.png")` agree.
pub fn static_url(media_url: &str, filepath: &str) -> String {
  join_url(media_url, filepath)
}

/// Look up a named URL, yielding an empty string for unknown names.
pub fn named_url(urls: &BTreeMap<String, String>, key: &str) -> String {
  match urls.get(key) {
    Some(url) => url.clone(),
    None => {
      log::debug!("no url registered for {key:?}");
      String::new()
    }
  }
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
  if path.starts_with('/') || base.is_empty() {
    return path.to_string();
  }
  if base.ends_with('/') {
    format!("{base}{path}")
  } else {
    format!("{base}/{path}")
  }
}
