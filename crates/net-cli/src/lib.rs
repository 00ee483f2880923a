//! ifupdown2 interfaces generator CLI
//!
//! Command line front end printing swp defaults or untagged bridge
//! sections for /etc/network/interfaces.

pub mod cli;
pub mod commands;


use std::io::Write;

use anyhow::Result;

use ifgen_core::{GenerationMode, GeneratorConfig, Settings};

pub use cli::Cli;
pub use commands::{BridgeDefaultCommand, SwpDefaultsCommand};

/// Generate the document selected by `config` and write it to `out`
pub async fn run<W: Write>(
    config: &GeneratorConfig,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    match config.mode() {
        GenerationMode::SwpDefaults => {
            SwpDefaultsCommand::from_settings(settings)
                .execute(config.merge_path(), out)
                .await
        }
        GenerationMode::BridgeDefault => BridgeDefaultCommand::from_settings(settings).execute(out),
    }
}
