//! HTML markup builders for high-resolution and platform-specific images.
//!
//! Markup is returned raw; attribute values are not escaped, so the template layer decides
//! how the output is embedded.

mod attributes;
mod high_res;
mod platform;

pub use attributes::{Attributes, validate_attribute_name};
pub use high_res::{HighResImageOptions, high_res_img};
pub use platform::{FALLBACK_PLATFORM, PlatformImageOptions, platform_img};
