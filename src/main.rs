mod app_dirs;
mod cli;
mod logging;
mod settings;

use std::sync::Arc;

use anyhow::{Context, Result};
use cli::parse_cli;
use pdfsift_client::{DocumentApi, HttpDocumentApi};
use pdfsift_tui::{UiLabels, builtin_themes, default_theme};

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for (name, _) in builtin_themes() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;
    logging::initialize(&resolved.log_filter)?;

    let api = HttpDocumentApi::new(resolved.server_url.clone())
        .context("could not construct service client")?;

    if cli.reset_library {
        api.reset_library().context("reset failed")?;
        println!("library reset on {}", resolved.server_url);
        return Ok(());
    }

    let theme = match resolved.theme.as_deref() {
        Some(name) => builtin_themes()
            .into_iter()
            .find(|(theme_name, _)| *theme_name == name)
            .map(|(_, theme)| theme)
            .with_context(|| format!("unknown theme '{name}'"))?,
        None => default_theme(),
    };

    pdfsift_tui::run(Arc::new(api), UiLabels::default(), theme)
}
