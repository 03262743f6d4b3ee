use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use site_media_helpers::config::{DEFAULT_CONFIG_FILE, SiteConfig};
use site_media_helpers::logging::log_to_stderr;
use site_media_helpers::{SiteMedia, register_helpers};

/// Render site templates with the media helpers installed.
#[derive(Debug, Parser)]
#[command(name = "site-media", version, about)]
struct Cli {
  /// Site configuration file (JSON or YAML). Defaults to `site.config.json` in the
  /// current directory when present.
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Log resolver decisions.
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Render a template file to stdout.
  Render {
    /// Template file to render.
    template: PathBuf,
    /// Request locale exposed to the template as `LANG`.
    #[arg(long)]
    lang: Option<String>,
    /// Extra context value, as KEY=VALUE.
    #[arg(long = "var", value_parser = parse_var)]
    vars: Vec<(String, String)>,
  },
  /// Print the localized file name and URL chosen for an image.
  Resolve {
    /// Image path below `img/l10n/<locale>/`.
    path: String,
    /// Request locale.
    #[arg(long)]
    lang: Option<String>,
  },
}

fn parse_var(value: &str) -> Result<(String, String)> {
  let (key, val) = value
    .split_once('=')
    .ok_or_else(|| anyhow!("expected KEY=VALUE, got {value:?}"))?;
  if key.is_empty() {
    return Err(anyhow!("empty variable name in {value:?}"));
  }
  Ok((key.to_string(), val.to_string()))
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
  let cwd = std::env::current_dir().context("failed to read current directory")?;
  let config = match path {
    Some(path) => {
      let base = path.parent().unwrap_or(Path::new("."));
      SiteConfig::load(path)?.with_media_root_under(base)
    }
    None => SiteConfig::discover(&cwd).with_media_root_under(&cwd),
  };
  log::debug!(
    "media root {} (config {})",
    config.media_root.display(),
    path.map_or_else(|| DEFAULT_CONFIG_FILE.into(), |p| p.display().to_string())
  );
  Ok(config)
}

fn warn_unsupported(config: &SiteConfig, lang: Option<&str>) {
  if let Some(lang) = lang.filter(|lang| !config.is_supported_locale(lang)) {
    log::warn!(
      "locale {lang} is not one of the configured locales ({})",
      config.locales.join(", ")
    );
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  log_to_stderr(if cli.verbose {
    LevelFilter::Debug
  } else {
    LevelFilter::Warn
  });

  let config = load_config(cli.config.as_deref())?;

  match cli.command {
    Command::Render {
      template,
      lang,
      vars,
    } => {
      warn_unsupported(&config, lang.as_deref());
      let source = fs::read_to_string(&template)
        .with_context(|| format!("failed to read {}", template.display()))?;
      let name = template.to_string_lossy().into_owned();

      let site = SiteMedia::from_config(config);
      let mut tera = tera::Tera::default();
      register_helpers(&mut tera, &site);
      tera
        .add_raw_template(&name, &source)
        .with_context(|| format!("failed to parse {}", template.display()))?;

      let mut context = tera::Context::new();
      context.insert("LANG", &lang.unwrap_or_else(|| site.config().language_code.clone()));
      for (key, value) in &vars {
        context.insert(key.as_str(), value);
      }

      let output = tera
        .render(&name, &context)
        .with_context(|| format!("failed to render {}", template.display()))?;
      print!("{output}");
    }
    Command::Resolve { path, lang } => {
      warn_unsupported(&config, lang.as_deref());
      let site = SiteMedia::from_config(config);
      let resolver = site.resolver();
      println!("{}", resolver.file_name(lang.as_deref(), &path));
      println!("{}", resolver.url(lang.as_deref(), &path));
    }
  }

  Ok(())
}
