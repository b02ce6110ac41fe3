use anyhow::Result;
use clap::Parser;
use site_config::{EndpointRegistry, Resource};

#[derive(Debug, Clone, Parser)]
pub struct EndpointsCommand {
    /// Logical resource name (items, loans-active, loans-history)
    resource: Option<String>,
}

impl EndpointsCommand {
    pub fn run(self) -> Result<()> {
        let registry = EndpointRegistry::new();

        match self.resource {
            Some(name) => {
                let resource = Resource::from_name(&name)?;
                println!("{}", registry.path(resource));
            }
            None => {
                for (resource, path) in registry.iter() {
                    println!("{resource}\t{path}");
                }
            }
        }

        Ok(())
    }
}
