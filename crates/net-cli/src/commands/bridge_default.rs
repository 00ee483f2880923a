//! Bridge default command

use std::io::Write;

use anyhow::{Context, Result};

use ifgen_config::{generate_bridge_default, BRIDGE_NAME};
use ifgen_core::{PortTable, Settings};

/// Bridge default command implementation
pub struct BridgeDefaultCommand {
    porttab: PortTable,
}

impl BridgeDefaultCommand {
    pub fn new(porttab: PortTable) -> Self {
        Self { porttab }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(PortTable::new(&settings.porttab_path))
    }

    /// Execute bridge default command
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        let ports = self.porttab.require_ports()?;

        let document = generate_bridge_default(&ports)?;

        out.write_all(document.as_bytes())
            .and_then(|()| out.flush())
            .with_context(|| format!("Failed to write {} stanza", BRIDGE_NAME))?;

        log::info!("Generated {} with {} ports", BRIDGE_NAME, ports.len());
        Ok(())
    }
}
