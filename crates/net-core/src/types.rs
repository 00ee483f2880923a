//! Core generator types

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{PortTableError, UsageError};

/// Name of a physical switch port, e.g. `swp1`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortName(String);

impl PortName {
    /// Create a port name, rejecting empty or whitespace-containing names
    pub fn new(name: impl Into<String>) -> Result<Self, PortTableError> {
        let name = name.into();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(PortTableError::InvalidPortName { name });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PortName {
    type Err = PortTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for PortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What kind of interfaces document to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// One `auto`/`iface` stanza per swp port
    SwpDefaults,
    /// A single untagged bridge with every swp port as a member
    BridgeDefault,
}

/// Immutable run configuration, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    mode: GenerationMode,
    merge_path: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Build the run configuration from the raw mode flags.
    ///
    /// `swp_defaults` wins when both flags are set; the command line layer
    /// already rejects that combination.
    pub fn new(
        swp_defaults: bool,
        bridge_default: bool,
        merge_path: Option<PathBuf>,
    ) -> Result<Self, UsageError> {
        if !swp_defaults && !bridge_default {
            return Err(UsageError::NoModeSelected);
        }

        if bridge_default && merge_path.is_some() {
            return Err(UsageError::merge_requires_swp_defaults());
        }

        let mode = if swp_defaults {
            GenerationMode::SwpDefaults
        } else {
            GenerationMode::BridgeDefault
        };

        Ok(Self { mode, merge_path })
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// Reference interfaces file to merge existing stanzas from
    pub fn merge_path(&self) -> Option<&Path> {
        self.merge_path.as_deref()
    }
}

/// One block of interfaces(5) configuration text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stanza(String);

impl Stanza {
    /// Minimal `auto`/`iface` pair for a port, terminated by a blank line
    pub fn default_for(port: &PortName) -> Self {
        Self(format!("auto {port}\niface {port}\n\n"))
    }

    /// Stanza text taken over unchanged from an existing configuration
    pub fn verbatim(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Stanza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
