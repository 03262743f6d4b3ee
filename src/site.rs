//! Shared handle bundling the site settings with the media lookup.

use std::sync::Arc;

use crate::asset_paths::{LocalizedResolver, static_url};
use crate::config::SiteConfig;
use crate::media::{FilesystemMedia, MediaLookup};

/// Read-only site state handed to every helper.
///
/// Cloning is cheap; clones share the same settings and lookup.
#[derive(Clone)]
pub struct SiteMedia {
  config: Arc<SiteConfig>,
  media: Arc<dyn MediaLookup>,
}

impl SiteMedia {
  /// Create a handle from settings and an explicit media lookup.
  pub fn new(config: SiteConfig, media: Arc<dyn MediaLookup>) -> Self {
    Self {
      config: Arc::new(config),
      media,
    }
  }

  /// Create a handle checking files under the configured media root.
  pub fn from_config(config: SiteConfig) -> Self {
    let media = Arc::new(FilesystemMedia::new(config.media_root.clone()));
    Self::new(config, media)
  }

  /// Site settings.
  pub fn config(&self) -> &SiteConfig {
    &self.config
  }

  /// Media lookup used for existence checks.
  pub fn media(&self) -> &dyn MediaLookup {
    self.media.as_ref()
  }

  /// Localized image resolver borrowing this handle.
  pub fn resolver(&self) -> LocalizedResolver<'_> {
    LocalizedResolver::new(&self.config, self.media.as_ref())
  }

  /// URL of a media-relative path.
  pub fn static_url(&self, filepath: &str) -> String {
    static_url(&self.config.media_url, filepath)
  }
}

impl std::fmt::Debug for SiteMedia {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SiteMedia")
      .field("config", &self.config)
      .finish_non_exhaustive()
  }
}
