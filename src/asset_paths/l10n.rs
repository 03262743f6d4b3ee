use crate::asset_paths::static_url;
use crate::config::SiteConfig;
use crate::media::MediaLookup;

/// Locale prefix whose dialects share one set of localized images.
const SPANISH_PREFIX: &str = "es";
/// Locale holding the shared Spanish images.
const SPANISH_FALLBACK: &str = "es-ES";

/// Picks the best available localized variant of an image.
///
/// Images live under `{media_root}/img/l10n/{locale}/`. A locale without its own copy of an
/// image falls back to the default locale, and every Spanish dialect first falls back to
/// `es-ES`. The resolver checks the filesystem on every call.
#[derive(Clone, Copy)]
pub struct LocalizedResolver<'a> {
  config: &'a SiteConfig,
  media: &'a dyn MediaLookup,
}

impl<'a> LocalizedResolver<'a> {
  /// Create a resolver for the provided settings and media lookup.
  pub fn new(config: &'a SiteConfig, media: &'a dyn MediaLookup) -> Self {
    Self { config, media }
  }

  /// Return the media-relative file name of the localized image for use by [`static_url`].
  ///
  /// An absent or empty `locale` means the default locale. When not even the default-locale
  /// image exists the default-locale path is still returned.
  pub fn file_name(&self, locale: Option<&str>, url: &str) -> String {
    let url = url.trim_start_matches('/');
    let default_locale = self.config.language_code.as_str();
    let mut locale = locale
      .filter(|value| !value.is_empty())
      .unwrap_or(default_locale);

    if locale.starts_with(SPANISH_PREFIX) && !self.localized_exists(locale, url) {
      log::debug!("{url}: no {locale} image, using {SPANISH_FALLBACK}");
      locale = SPANISH_FALLBACK;
    }

    if locale != default_locale && !self.localized_exists(locale, url) {
      log::debug!("{url}: no {locale} image, using {default_locale}");
      locale = default_locale;
    }

    localized_path(locale, url)
  }

  /// Return the URL of the localized image.
  pub fn url(&self, locale: Option<&str>, url: &str) -> String {
    static_url(&self.config.media_url, &self.file_name(locale, url))
  }

  fn localized_exists(&self, locale: &str, url: &str) -> bool {
    self.media.exists(&localized_path(locale, url))
  }
}

fn localized_path(locale: &str, url: &str) -> String {
  format!("img/l10n/{locale}/{url}")
}
