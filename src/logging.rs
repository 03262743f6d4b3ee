//! Logger installation for the command line tool.

use log::LevelFilter;

/// Log to stderr at `level`, unless `RUST_LOG` overrides it.
///
/// Records from this crate are tagged with their module, e.g. `[asset_paths::l10n]`.
///
/// If called multiple times in the same process, only applies once.
pub fn log_to_stderr(level: LevelFilter) {
  static ONCE: std::sync::Once = std::sync::Once::new();

  ONCE.call_once(|| {
    env_logger::Builder::new()
      .filter_level(level)
      .parse_default_env()
      .format(|buf, record| {
        use std::io::Write;

        let now = time::OffsetDateTime::now_utc();

        writeln!(
          buf,
          "{now} {:<5} [{}] {}",
          record.level(),
          short_target(record.target()),
          record.args()
        )
      })
      .init();
  });
}

/// Drop the crate prefix from targets inside this crate.
fn short_target(target: &str) -> &str {
  target
    .strip_prefix(concat!(env!("CARGO_CRATE_NAME"), "::"))
    .unwrap_or(target)
}

#[cfg(test)]
mod tests {
  use super::short_target;

  #[test]
  fn strips_crate_prefix_from_own_modules() {
    assert_eq!(short_target("site_media_helpers::asset_paths::l10n"), "asset_paths::l10n");
    assert_eq!(short_target("site_media_helpers::markup::platform"), "markup::platform");
  }

  #[test]
  fn keeps_foreign_targets() {
    assert_eq!(short_target("tera::renderer"), "tera::renderer");
    assert_eq!(short_target("site_media"), "site_media");
  }
}
