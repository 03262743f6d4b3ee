//! Error type shared by the helpers.

use std::path::PathBuf;

/// Errors raised while loading settings or rendering helper markup.
#[derive(Debug, thiserror::Error)]
pub enum HelperError {
  /// Platform markup needs a windows image for its `<noscript>` fallback.
  #[error("no windows variant exists for platform image {path}")]
  MissingWindowsVariant {
    /// Image path passed to the helper.
    path: String,
  },
  /// Passthrough attribute name that cannot appear in an HTML tag.
  #[error("invalid HTML attribute name {0:?}")]
  InvalidAttributeName(String),
  /// Failed to read or parse a configuration file.
  #[error("failed to load {}: {message}", path.display())]
  Config {
    /// Path that caused the error.
    path: PathBuf,
    /// Underlying read or parse failure.
    message: String,
  },
}
