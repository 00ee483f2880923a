//! Swp defaults command

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use ifgen_config::SwpDefaultsGenerator;
use ifgen_core::{MergeResolver, PortTable, Settings};
use ifgen_query::IfQueryResolver;

/// Swp defaults command implementation
pub struct SwpDefaultsCommand<R> {
    porttab: PortTable,
    generator: SwpDefaultsGenerator<R>,
}

impl SwpDefaultsCommand<IfQueryResolver> {
    /// Create command using the configured port table and ifquery
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            PortTable::new(&settings.porttab_path),
            IfQueryResolver::from_settings(settings),
        )
    }
}

impl<R: MergeResolver> SwpDefaultsCommand<R> {
    pub fn new(porttab: PortTable, resolver: R) -> Self {
        Self {
            porttab,
            generator: SwpDefaultsGenerator::new(resolver),
        }
    }

    /// Execute swp defaults command
    pub async fn execute<W: Write>(&self, merge_path: Option<&Path>, out: &mut W) -> Result<()> {
        let ports = self.porttab.require_ports()?;

        let document = self.generator.generate(&ports, merge_path).await;

        out.write_all(document.as_bytes())
            .and_then(|()| out.flush())
            .context("Failed to write swp defaults")?;

        log::info!("Generated swp defaults for {} ports", ports.len());
        Ok(())
    }
}
