//! Site configuration loader describing media layout, locales and platforms.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::HelperError;

/// File name searched for by [`SiteConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "site.config.json";

/// Process-wide settings shared by every template helper.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
  /// Filesystem directory holding the site media (`img/`, `img/l10n/<locale>/`, ...).
  pub media_root: PathBuf,
  /// Base URL prefixed to every static asset path.
  pub media_url: String,
  /// Default locale used when a request has no locale or a localized file is missing.
  pub language_code: String,
  /// Locales the site is translated into.
  pub locales: Vec<String>,
  /// Platforms emitted by `platform_img` when the caller does not narrow the set.
  pub platforms: Vec<String>,
  /// Named URLs resolvable through the `url` helper.
  pub urls: BTreeMap<String, String>,
}

impl Default for SiteConfig {
  fn default() -> Self {
    Self {
      media_root: PathBuf::from("media"),
      media_url: "/media/".into(),
      language_code: "en-US".into(),
      locales: vec!["en-US".into()],
      platforms: vec!["windows".into(), "osx".into(), "linux".into()],
      urls: BTreeMap::new(),
    }
  }
}

impl SiteConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// A missing or malformed configuration file yields the default settings.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    match Self::load(&candidate) {
      Ok(config) => config,
      Err(err) => {
        log::debug!("using default site configuration: {err}");
        Self::default()
      }
    }
  }

  /// Read configuration from a JSON or YAML file, chosen by extension.
  pub fn load(path: &Path) -> Result<Self, HelperError> {
    let content = fs::read_to_string(path).map_err(|err| HelperError::Config {
      path: path.to_path_buf(),
      message: err.to_string(),
    })?;

    let is_yaml = path
      .extension()
      .and_then(|ext| ext.to_str())
      .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let parsed = if is_yaml {
      serde_yaml::from_str(&content).map_err(|err| err.to_string())
    } else {
      serde_json::from_str(&content).map_err(|err| err.to_string())
    };

    parsed.map_err(|message| HelperError::Config {
      path: path.to_path_buf(),
      message,
    })
  }

  /// Resolve the media root against `base` when it is relative.
  pub fn with_media_root_under(mut self, base: &Path) -> Self {
    if self.media_root.is_relative() {
      self.media_root = base.join(&self.media_root);
    }
    self
  }

  /// Whether `locale` is one of the configured site locales.
  pub fn is_supported_locale(&self, locale: &str) -> bool {
    self.locales.iter().any(|value| value == locale)
  }
}
