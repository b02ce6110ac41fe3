use anyhow::Result;
use clap::{Parser, Subcommand};

mod adapter;
mod endpoints;
mod qr;
mod tracing;

use adapter::*;
use endpoints::*;
use qr::*;
use tracing::*;

#[derive(Debug, Clone, Subcommand)]
pub enum CliSubcommand {
    /// Print the static-site adapter descriptor as JSON
    Adapter(AdapterCommand),
    /// List api endpoint paths, or resolve a single resource
    Endpoints(EndpointsCommand),
    /// Generate the deployment qr poster
    Qr(QrCommand),
}

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    subcommand: CliSubcommand,
}

impl Cli {
    pub fn new() -> Self {
        Self::parse()
    }

    pub fn run(self) -> Result<()> {
        setup_tracing();

        match self.subcommand {
            CliSubcommand::Adapter(cmd) => cmd.run(),
            CliSubcommand::Endpoints(cmd) => cmd.run(),
            CliSubcommand::Qr(cmd) => cmd.run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::Cli;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
