//! Registration of the media helpers as `tera` functions.
//!
//! Every helper is registered explicitly under its template-facing name. The request locale
//! is an ordinary argument, so templates pass it along:
//!
//! ```text
//! <img src="{{ l10n_img(path='firefox/screenshot.png', lang=LANG | default(value='')) }}">
//! {{ platform_img(path='firefox/shot.png', lang=LANG | default(value=''), high_res=true, alt='Screenshot') }}
//! ```
//!
//! The `default` filter keeps templates rendering when the context carries no `LANG`; an
//! empty `lang` selects the default locale.
//!
//! `high_res_img` and `platform_img` return markup and are reported as safe. The URL helpers
//! return plain strings that tera autoescapes like any other value.

use std::collections::{BTreeMap, HashMap};

use tera::{Function, Tera, Value};

use crate::asset_paths::named_url;
use crate::markup::{HighResImageOptions, PlatformImageOptions, high_res_img, platform_img};
use crate::site::SiteMedia;

/// Template-facing helper names in registration order.
pub const HELPER_NAMES: [&str; 5] = ["static", "url", "l10n_img", "high_res_img", "platform_img"];

const HIGH_RES_ARGS: &[&str] = &["path", "lang", "l10n"];
const PLATFORM_ARGS: &[&str] = &["path", "lang", "platforms", "high_res", "l10n"];

/// Register every media helper on `tera`.
pub fn register_helpers(tera: &mut Tera, site: &SiteMedia) {
  tera.register_function("static", StaticHelper { site: site.clone() });
  tera.register_function("url", UrlHelper { site: site.clone() });
  tera.register_function("l10n_img", L10nImgHelper { site: site.clone() });
  tera.register_function("high_res_img", HighResImgHelper { site: site.clone() });
  tera.register_function("platform_img", PlatformImgHelper { site: site.clone() });
}

struct StaticHelper {
  site: SiteMedia,
}

impl Function for StaticHelper {
  fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let path = required_str("static", args, "path")?;
    Ok(Value::String(self.site.static_url(path)))
  }
}

struct UrlHelper {
  site: SiteMedia,
}

impl Function for UrlHelper {
  fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let key = required_str("url", args, "key")?;
    Ok(Value::String(named_url(&self.site.config().urls, key)))
  }
}

struct L10nImgHelper {
  site: SiteMedia,
}

impl Function for L10nImgHelper {
  fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let path = required_str("l10n_img", args, "path")?;
    let lang = optional_str("l10n_img", args, "lang")?;
    Ok(Value::String(self.site.resolver().url(lang, path)))
  }
}

struct HighResImgHelper {
  site: SiteMedia,
}

impl Function for HighResImgHelper {
  fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let path = required_str("high_res_img", args, "path")?;
    let lang = optional_str("high_res_img", args, "lang")?;
    let options = HighResImageOptions {
      l10n: optional_bool("high_res_img", args, "l10n")?,
      attributes: passthrough_attributes("high_res_img", args, HIGH_RES_ARGS)?,
    };

    high_res_img(&self.site, lang, path, &options)
      .map(Value::String)
      .map_err(|err| tera::Error::msg(format!("high_res_img: {err}")))
  }

  fn is_safe(&self) -> bool {
    true
  }
}

struct PlatformImgHelper {
  site: SiteMedia,
}

impl Function for PlatformImgHelper {
  fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let path = required_str("platform_img", args, "path")?;
    let lang = optional_str("platform_img", args, "lang")?;
    let options = PlatformImageOptions {
      platforms: optional_str_list("platform_img", args, "platforms")?,
      high_res: optional_bool("platform_img", args, "high_res")?,
      l10n: optional_bool("platform_img", args, "l10n")?,
      attributes: passthrough_attributes("platform_img", args, PLATFORM_ARGS)?,
    };

    platform_img(&self.site, lang, path, &options)
      .map(Value::String)
      .map_err(|err| tera::Error::msg(format!("platform_img: {err}")))
  }

  fn is_safe(&self) -> bool {
    true
  }
}

fn required_str<'a>(
  helper: &str,
  args: &'a HashMap<String, Value>,
  name: &str,
) -> tera::Result<&'a str> {
  optional_str(helper, args, name)?
    .ok_or_else(|| tera::Error::msg(format!("{helper}: missing required argument `{name}`")))
}

fn optional_str<'a>(
  helper: &str,
  args: &'a HashMap<String, Value>,
  name: &str,
) -> tera::Result<Option<&'a str>> {
  match args.get(name) {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(value)) => Ok(Some(value.as_str())),
    Some(other) => Err(type_error(helper, name, "a string", other)),
  }
}

fn optional_bool(helper: &str, args: &HashMap<String, Value>, name: &str) -> tera::Result<bool> {
  match args.get(name) {
    None | Some(Value::Null) => Ok(false),
    Some(Value::Bool(value)) => Ok(*value),
    Some(other) => Err(type_error(helper, name, "a boolean", other)),
  }
}

fn optional_str_list(
  helper: &str,
  args: &HashMap<String, Value>,
  name: &str,
) -> tera::Result<Option<Vec<String>>> {
  let values = match args.get(name) {
    None | Some(Value::Null) => return Ok(None),
    Some(Value::Array(values)) => values,
    Some(other) => return Err(type_error(helper, name, "an array of strings", other)),
  };

  values
    .iter()
    .map(|value| match value {
      Value::String(item) => Ok(item.clone()),
      other => Err(type_error(helper, name, "an array of strings", other)),
    })
    .collect::<tera::Result<Vec<_>>>()
    .map(Some)
}

/// Collect every argument not consumed by the helper as an HTML attribute.
fn passthrough_attributes(
  helper: &str,
  args: &HashMap<String, Value>,
  consumed: &[&str],
) -> tera::Result<BTreeMap<String, String>> {
  args
    .iter()
    .filter(|(name, _)| !consumed.contains(&name.as_str()))
    .map(|(name, value)| {
      let rendered = match value {
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        other => return Err(type_error(helper, name, "a string, number or boolean", other)),
      };
      Ok((name.clone(), rendered))
    })
    .collect()
}

fn type_error(helper: &str, name: &str, expected: &str, found: &Value) -> tera::Error {
  tera::Error::msg(format!(
    "{helper}: argument `{name}` must be {expected}, got {found}"
  ))
}
