//! Port table enumeration
//!
//! The port table is maintained by the switch inventory subsystem. Every
//! record is a whitespace separated line whose first field is the port name.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::PortTableError;
use crate::types::PortName;

/// Default location of the port table
pub const DEFAULT_PORTTAB_PATH: &str = "/var/lib/cumulus/porttab";

/// Marker that disqualifies a whole line, wherever it appears
const COMMENT_MARKER: char = '#';

/// Read-only view of the system port table
#[derive(Debug, Clone)]
pub struct PortTable {
    path: PathBuf,
}

impl PortTable {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List ports in table order
    pub fn list_ports(&self) -> Result<Vec<PortName>, PortTableError> {
        let file = File::open(&self.path).map_err(|source| PortTableError::Unavailable {
            path: self.path.clone(),
            source,
        })?;

        let ports = parse_port_table(BufReader::new(file)).map_err(|source| {
            PortTableError::Unavailable {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!("Found {} ports in {}", ports.len(), self.path.display());
        Ok(ports)
    }

    /// List ports, treating an empty table as an error
    pub fn require_ports(&self) -> Result<Vec<PortName>, PortTableError> {
        let ports = self.list_ports()?;
        if ports.is_empty() {
            warn!("No ports listed in {}", self.path.display());
            return Err(PortTableError::EmptyPortList);
        }
        Ok(ports)
    }
}

impl Default for PortTable {
    fn default() -> Self {
        Self::new(DEFAULT_PORTTAB_PATH)
    }
}

/// Extract port names from port table content.
///
/// Lines containing the comment marker anywhere are skipped, as are lines
/// without any field. Bytes that are not valid UTF-8 do not end the parse;
/// only read errors do.
pub fn parse_port_table<R: BufRead>(reader: R) -> std::io::Result<Vec<PortName>> {
    let mut ports = Vec::new();

    for raw in reader.split(b'\n') {
        let raw = raw?;
        let line = String::from_utf8_lossy(&raw);
        if line.contains(COMMENT_MARKER) {
            continue;
        }

        // split_whitespace never yields an empty token
        if let Some(port) = line
            .split_whitespace()
            .next()
            .and_then(|token| PortName::new(token).ok())
        {
            ports.push(port);
        }
    }

    Ok(ports)
}
