use std::collections::BTreeMap;

use crate::asset_paths::{HIGH_RES_SUFFIX, add_string_to_image_url, convert_to_high_res, join_url};
use crate::error::HelperError;
use crate::markup::attributes::{Attributes, validate_attribute_name};
use crate::site::SiteMedia;

/// Platform whose image is shown when scripting is disabled.
pub const FALLBACK_PLATFORM: &str = "windows";

/// Options accepted by [`platform_img`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlatformImageOptions {
  /// Platforms to emit; `None` means every configured platform.
  pub platforms: Option<Vec<String>>,
  /// Also emit a `-high-res` variant for each platform.
  pub high_res: bool,
  /// Resolve variants through the localized image directories.
  pub l10n: bool,
  /// Extra attributes copied onto both tags, overriding generated ones.
  pub attributes: BTreeMap<String, String>,
}

/// Render a platform-switching image.
///
/// The first tag carries a `data-src-<platform>` attribute per existing variant and is left
/// without a `src` until client-side script picks the visitor's platform. The `<noscript>`
/// tag shows the windows variant directly, so a `data-src-windows` value must end up set,
/// either from an existing file or from the passthrough attributes.
pub fn platform_img(
  site: &SiteMedia,
  locale: Option<&str>,
  url: &str,
  options: &PlatformImageOptions,
) -> Result<String, HelperError> {
  let platforms = options
    .platforms
    .as_deref()
    .unwrap_or(site.config().platforms.as_slice());

  let mut variants = Vec::with_capacity(platforms.len() * 2);
  for platform in platforms {
    let variant = add_string_to_image_url(url, platform);
    if options.high_res {
      let high_res = convert_to_high_res(&variant);
      variants.push((platform.clone(), variant));
      variants.push((format!("{platform}-{HIGH_RES_SUFFIX}"), high_res));
    } else {
      variants.push((platform.clone(), variant));
    }
  }

  let resolver = site.resolver();
  let mut attributes = Attributes::new();
  for (key, image) in variants {
    let image = if options.l10n {
      resolver.file_name(locale, &image)
    } else {
      join_url("img", &image)
    };

    if site.media().exists(&image) {
      attributes.set(format!("data-src-{key}"), site.static_url(&image));
    } else {
      log::debug!("{url}: skipping missing {key} variant {image}");
    }
  }

  if options.high_res {
    attributes.set("data-high-res", "true");
  }

  for (name, value) in &options.attributes {
    validate_attribute_name(name)?;
    attributes.set(name.as_str(), value.as_str());
  }

  let windows_src = attributes
    .get(&format!("data-src-{FALLBACK_PLATFORM}"))
    .map(str::to_string)
    .ok_or_else(|| HelperError::MissingWindowsVariant {
      path: url.to_string(),
    })?;
  let attrs = attributes.render();

  Ok(format!(
    concat!(
      r#"<img class="platform-img js" src="" data-processed="false" {attrs}>"#,
      r#"<noscript><img class="platform-img win" src="{windows_src}" {attrs}></noscript>"#,
    ),
    attrs = attrs,
    windows_src = windows_src,
  ))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::SiteConfig;
  use std::fs;
  use std::path::Path;
  use tempfile::tempdir;

  fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"img").unwrap();
  }

  fn site(root: &Path) -> SiteMedia {
    SiteMedia::from_config(SiteConfig {
      media_root: root.to_path_buf(),
      ..SiteConfig::default()
    })
  }

  #[test]
  fn lists_only_existing_platform_variants() {
    let temp = tempdir().unwrap();
    touch(temp.path(), "img/firefox/shot-windows.png");
    touch(temp.path(), "img/firefox/shot-osx.png");

    let markup = platform_img(
      &site(temp.path()),
      None,
      "firefox/shot.png",
      &PlatformImageOptions::default(),
    )
    .unwrap();

    assert_eq!(
      markup,
      concat!(
        r#"<img class="platform-img js" src="" data-processed="false" "#,
        r#"data-src-windows="/media/img/firefox/shot-windows.png" "#,
        r#"data-src-osx="/media/img/firefox/shot-osx.png">"#,
        r#"<noscript><img class="platform-img win" src="/media/img/firefox/shot-windows.png" "#,
        r#"data-src-windows="/media/img/firefox/shot-windows.png" "#,
        r#"data-src-osx="/media/img/firefox/shot-osx.png"></noscript>"#,
      )
    );
    assert!(!markup.contains("data-src-linux"));
  }

  #[test]
  fn emits_high_res_variants_and_flag() {
    let temp = tempdir().unwrap();
    touch(temp.path(), "img/shot-windows.png");
    touch(temp.path(), "img/shot-windows-high-res.png");
    touch(temp.path(), "img/shot-linux.png");

    let options = PlatformImageOptions {
      platforms: Some(vec!["windows".into(), "linux".into()]),
      high_res: true,
      ..PlatformImageOptions::default()
    };
    let markup = platform_img(&site(temp.path()), None, "shot.png", &options).unwrap();

    assert!(markup.contains(concat!(
      r#"data-src-windows="/media/img/shot-windows.png" "#,
      r#"data-src-windows-high-res="/media/img/shot-windows-high-res.png" "#,
      r#"data-src-linux="/media/img/shot-linux.png" "#,
      r#"data-high-res="true">"#,
    )));
    assert!(!markup.contains("data-src-linux-high-res"));
  }

  #[test]
  fn localizes_platform_variants() {
    let temp = tempdir().unwrap();
    touch(temp.path(), "img/l10n/fr/shot-windows.png");
    touch(temp.path(), "img/l10n/en-US/shot-osx.png");

    let options = PlatformImageOptions {
      platforms: Some(vec!["windows".into(), "osx".into()]),
      l10n: true,
      ..PlatformImageOptions::default()
    };
    let markup = platform_img(&site(temp.path()), Some("fr"), "shot.png", &options).unwrap();

    assert!(markup.contains(r#"data-src-windows="/media/img/l10n/fr/shot-windows.png""#));
    assert!(markup.contains(r#"data-src-osx="/media/img/l10n/en-US/shot-osx.png""#));
    assert!(markup.contains(r#"src="/media/img/l10n/fr/shot-windows.png""#));
  }

  #[test]
  fn passthrough_attributes_override_generated_ones() {
    let temp = tempdir().unwrap();
    touch(temp.path(), "img/shot-windows.png");

    let options = PlatformImageOptions {
      platforms: Some(vec!["windows".into()]),
      attributes: BTreeMap::from([
        ("alt".to_string(), "Screenshot".to_string()),
        ("data-src-windows".to_string(), "/override.png".to_string()),
      ]),
      ..PlatformImageOptions::default()
    };
    let markup = platform_img(&site(temp.path()), None, "shot.png", &options).unwrap();

    assert!(markup.contains(r#"data-processed="false" data-src-windows="/override.png" alt="Screenshot">"#));
    assert!(markup.contains(r#"<noscript><img class="platform-img win" src="/override.png" "#));
  }

  #[test]
  fn passthrough_windows_source_satisfies_fallback() {
    let temp = tempdir().unwrap();

    let options = PlatformImageOptions {
      platforms: Some(vec!["windows".into()]),
      attributes: BTreeMap::from([("data-src-windows".to_string(), "/cdn/shot.png".to_string())]),
      ..PlatformImageOptions::default()
    };
    let markup = platform_img(&site(temp.path()), None, "shot.png", &options).unwrap();

    assert!(markup.contains(r#"<noscript><img class="platform-img win" src="/cdn/shot.png" "#));
  }

  #[test]
  fn missing_windows_variant_is_an_error() {
    let temp = tempdir().unwrap();
    touch(temp.path(), "img/shot-osx.png");

    let err = platform_img(
      &site(temp.path()),
      None,
      "shot.png",
      &PlatformImageOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(err, HelperError::MissingWindowsVariant { path } if path == "shot.png"));
  }

  #[test]
  fn excluding_windows_is_an_error() {
    let temp = tempdir().unwrap();
    touch(temp.path(), "img/shot-windows.png");
    touch(temp.path(), "img/shot-linux.png");

    let options = PlatformImageOptions {
      platforms: Some(vec!["linux".into()]),
      ..PlatformImageOptions::default()
    };
    assert!(platform_img(&site(temp.path()), None, "shot.png", &options).is_err());
  }
}
