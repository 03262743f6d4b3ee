//! Helpers for building media paths and URLs.
//!
//! Suffixing, URL joining and locale fallback live in separate submodules so each can be
//! tested on its own; the markup builders and template helpers compose them.

mod l10n;
mod static_url;
mod suffix;

pub use l10n::LocalizedResolver;
pub(crate) use static_url::join_url;
pub use static_url::{named_url, static_url};
pub use suffix::{HIGH_RES_SUFFIX, add_string_to_image_url, convert_to_high_res};
