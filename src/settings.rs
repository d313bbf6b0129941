//! Layered configuration resolution.
//!
//! Settings come from, in increasing precedence: default config file
//! locations, files passed with `--config`, `PDFSIFT__`-prefixed environment
//! variables, and finally CLI flags.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use config::{Config, ConfigError, File};
use serde::Deserialize;
use url::Url;

use crate::app_dirs;
use crate::cli::CliArgs;

/// Service URL used when nothing is configured; matches the development
/// server's default bind address.
const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    server: ServerSection,
    ui: UiSection,
    log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ServerSection {
    url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    theme: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
    filter: Option<String>,
}

/// Fully resolved application configuration.
pub struct ResolvedConfig {
    pub server_url: Url,
    pub theme: Option<String>,
    pub log_filter: String,
}

/// Resolve effective settings from configuration sources and CLI overrides.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let raw: RawConfig = build_config(cli)?
        .try_deserialize()
        .context("invalid configuration")?;

    let server = cli
        .server
        .clone()
        .or(raw.server.url)
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
    let server_url = Url::parse(&server)
        .with_context(|| format!("invalid service URL '{server}'"))?;

    let theme = cli.theme.clone().or(raw.ui.theme);
    let log_filter = cli
        .log
        .clone()
        .or(raw.log.filter)
        .unwrap_or_else(|| "pdfsift=info".to_string());

    Ok(ResolvedConfig {
        server_url,
        theme,
        log_filter,
    })
}

/// Build a [`Config`] instance by combining default locations with CLI overrides.
fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("pdfsift")
            .separator("__")
            .try_parsing(true),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

/// Discover the default configuration file locations that should be consulted.
fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".pdfsift.toml"));
        files.push(current_dir.join("pdfsift.toml"));
    }

    files
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn bare_cli() -> CliArgs {
        CliArgs {
            server: None,
            config: Vec::new(),
            no_config: true,
            theme: None,
            list_themes: false,
            reset_library: false,
            log: None,
        }
    }

    #[test]
    fn default_files_include_current_directory_variants() {
        let files = default_config_files();
        assert!(files.iter().any(|path| path.ends_with(".pdfsift.toml")));
        assert!(files.iter().any(|path| path.ends_with("pdfsift.toml")));
    }

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let resolved = load(&bare_cli()).expect("load");
        assert_eq!(resolved.server_url.as_str(), "http://localhost:8000/");
        assert!(resolved.theme.is_none());
        assert_eq!(resolved.log_filter, "pdfsift=info");
    }

    #[test]
    fn cli_flags_override_config_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("override.toml");
        let mut file = std::fs::File::create(&path).expect("create");
        writeln!(file, "[server]\nurl = \"http://from-file:9999\"").expect("write");
        writeln!(file, "[ui]\ntheme = \"plain\"").expect("write");

        let mut cli = bare_cli();
        cli.config.push(path);
        let resolved = load(&cli).expect("load");
        assert_eq!(resolved.server_url.as_str(), "http://from-file:9999/");
        assert_eq!(resolved.theme.as_deref(), Some("plain"));

        let mut cli_with_flag = bare_cli();
        cli_with_flag.config.push(dir.path().join("override.toml"));
        cli_with_flag.server = Some("http://from-cli:8001".to_string());
        let resolved = load(&cli_with_flag).expect("load");
        assert_eq!(resolved.server_url.as_str(), "http://from-cli:8001/");
    }

    #[test]
    fn invalid_server_urls_are_rejected() {
        let mut cli = bare_cli();
        cli.server = Some("not a url".to_string());
        assert!(load(&cli).is_err());
    }
}
