use std::collections::BTreeMap;

use crate::asset_paths::{convert_to_high_res, join_url};
use crate::error::HelperError;
use crate::markup::attributes::{Attributes, validate_attribute_name};
use crate::site::SiteMedia;

/// Options accepted by [`high_res_img`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HighResImageOptions {
  /// Resolve both images through the localized image directories.
  pub l10n: bool,
  /// Extra attributes copied onto the tag. `class` is emitted first.
  pub attributes: BTreeMap<String, String>,
}

/// Render an `<img>` whose `srcset` offers the high-resolution variant at 1.5x density.
///
/// Without `l10n` both images are looked up below `img/`; with it both go through the
/// localized resolver independently, so a locale may provide only one of them.
pub fn high_res_img(
  site: &SiteMedia,
  locale: Option<&str>,
  url: &str,
  options: &HighResImageOptions,
) -> Result<String, HelperError> {
  let url_high_res = convert_to_high_res(url);
  let (src, src_high_res) = if options.l10n {
    let resolver = site.resolver();
    (
      resolver.url(locale, url),
      resolver.url(locale, &url_high_res),
    )
  } else {
    (
      site.static_url(&join_url("img", url)),
      site.static_url(&join_url("img", &url_high_res)),
    )
  };

  let mut attributes = Attributes::new();
  for (name, value) in &options.attributes {
    validate_attribute_name(name)?;
    attributes.set(name.as_str(), value.as_str());
  }
  let class_name = attributes.remove("class").unwrap_or_default();
  let extra = if attributes.is_empty() {
    String::new()
  } else {
    format!(" {}", attributes.render())
  };

  Ok(format!(
    r#"<img class="{class_name}" src="{src}" srcset="{src_high_res} 1.5x"{extra}>"#
  ))
}
