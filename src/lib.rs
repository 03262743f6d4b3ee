#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod error;
pub mod helpers;
pub mod logging;
pub mod markup;
pub mod media;
pub mod site;

pub use asset_paths::LocalizedResolver;
pub use config::SiteConfig;
pub use error::HelperError;
pub use helpers::register_helpers;
pub use media::{FilesystemMedia, MediaLookup};
pub use site::SiteMedia;
