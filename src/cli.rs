use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Parse command line arguments into the strongly typed [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

/// Command-line arguments accepted by the `pdfsift` binary.
#[derive(Parser, Debug)]
#[command(
    name = "pdfsift",
    version,
    about = "Terminal client for a PDF document-search service"
)]
pub(crate) struct CliArgs {
    /// Base URL of the document-search service.
    #[arg(long, value_name = "URL", env = "PDFSIFT_SERVER")]
    pub server: Option<String>,

    /// Extra configuration files, later files taking precedence.
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "PDFSIFT_CONFIG",
        action = ArgAction::Append
    )]
    pub config: Vec<PathBuf>,

    /// Skip the default configuration file locations.
    #[arg(long)]
    pub no_config: bool,

    /// Color theme name.
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// List the built-in theme names and exit.
    #[arg(long)]
    pub list_themes: bool,

    /// Delete every stored document and index on the service, then exit.
    #[arg(long)]
    pub reset_library: bool,

    /// Log filter directive, e.g. `pdfsift=debug`.
    #[arg(long, value_name = "FILTER", env = "PDFSIFT_LOG")]
    pub log: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }
}
