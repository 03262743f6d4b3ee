//! Existence checks against the site's media directory.

use std::path::{Path, PathBuf};

/// Trait describing where helper output is checked for existing files.
pub trait MediaLookup: Send + Sync {
  /// Returns `true` when `relative_path` names an existing file under the media root.
  fn exists(&self, relative_path: &str) -> bool;
}

/// Media lookup backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct FilesystemMedia {
  root: PathBuf,
}

impl FilesystemMedia {
  /// Create a lookup rooted at `root`. The directory does not need to exist yet.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }
}

impl MediaLookup for FilesystemMedia {
  fn exists(&self, relative_path: &str) -> bool {
    let relative = relative_path.trim_start_matches('/');
    if Path::new(relative)
      .components()
      .any(|component| matches!(component, std::path::Component::ParentDir))
    {
      return false;
    }
    self.root.join(relative).exists()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  #[test]
  fn reports_existing_files_below_root() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("img/l10n/fr")).unwrap();
    fs::write(temp.path().join("img/l10n/fr/x.png"), b"png").unwrap();

    let media = FilesystemMedia::new(temp.path());
    assert!(media.exists("img/l10n/fr/x.png"));
    assert!(media.exists("/img/l10n/fr/x.png"));
    assert!(!media.exists("img/l10n/de/x.png"));
  }

  #[test]
  fn refuses_paths_escaping_root() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("media");
    fs::create_dir_all(&root).unwrap();
    fs::write(temp.path().join("secret.txt"), b"secret").unwrap();

    let media = FilesystemMedia::new(&root);
    assert!(!media.exists("../secret.txt"));
  }
}
