/// Suffix inserted before the extension of high-resolution images.
pub const HIGH_RES_SUFFIX: &str = "high-res";

/// Insert `-{addition}` between the file stem and extension of an image path.
///
/// `add_string_to_image_url("img/shot.png", "windows")` yields `img/shot-windows.png`.
/// Paths without an extension get the suffix appended to the whole string.
pub fn add_string_to_image_url(url: &str, addition: &str) -> String {
  let (stem, ext) = split_extension(url);
  format!("{stem}-{addition}{ext}")
}

/// Convert an image path to its high-resolution variant.
pub fn convert_to_high_res(url: &str) -> String {
  add_string_to_image_url(url, HIGH_RES_SUFFIX)
}

/// Split a path into stem and extension (including the dot).
///
/// Only the final path component is considered, and leading dots of that component do not
/// start an extension, so `.htaccess` and `dir.d/file` have none.
fn split_extension(path: &str) -> (&str, &str) {
  let name_start = path.rfind('/').map_or(0, |index| index + 1);
  let name = &path[name_start..];

  match name.rfind('.') {
    Some(dot) if name[..dot].chars().any(|c| c != '.') => path.split_at(name_start + dot),
    _ => (path, ""),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn inserts_platform_before_extension() {
    assert_eq!(add_string_to_image_url("a/b.png", "windows"), "a/b-windows.png");
  }

  #[test]
  fn converts_to_high_res() {
    assert_eq!(convert_to_high_res("a/b.png"), "a/b-high-res.png");
  }

  #[test]
  fn composes_platform_and_high_res() {
    let platform = add_string_to_image_url("firefox/screenshot.png", "windows");
    assert_eq!(
      convert_to_high_res(&platform),
      "firefox/screenshot-windows-high-res.png"
    );
  }

  #[test]
  fn appends_suffix_without_extension() {
    assert_eq!(convert_to_high_res("a/b"), "a/b-high-res");
    assert_eq!(convert_to_high_res("dir.d/file"), "dir.d/file-high-res");
  }

  #[test]
  fn only_last_extension_is_split() {
    assert_eq!(
      add_string_to_image_url("archive/logo.tar.gz", "osx"),
      "archive/logo.tar-osx.gz"
    );
  }

  #[test]
  fn leading_dots_do_not_start_an_extension() {
    assert_eq!(convert_to_high_res("img/.hidden"), "img/.hidden-high-res");
    assert_eq!(convert_to_high_res("..png"), "..png-high-res");
  }
}
