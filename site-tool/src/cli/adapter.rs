use anyhow::{Context, Result};
use clap::Parser;
use site_config::AdapterConfig;

#[derive(Debug, Clone, Parser)]
pub struct AdapterCommand {
    /// Emit a single line of JSON instead of pretty-printing
    #[arg(long)]
    compact: bool,
}

impl AdapterCommand {
    pub fn run(self) -> Result<()> {
        let config = AdapterConfig::default();
        config
            .validate()
            .context("adapter descriptor failed validation")?;

        let json = if self.compact {
            serde_json::to_string(&config)?
        } else {
            serde_json::to_string_pretty(&config)?
        };
        println!("{json}");

        Ok(())
    }
}
