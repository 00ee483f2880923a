//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

use ifgen_core::{GeneratorConfig, UsageError};

#[derive(Debug, Parser)]
#[command(name = "generate-interfaces")]
#[command(about = "ifupdown interfaces file gen helper")]
#[command(version)]
#[command(long_about = "
ifupdown interfaces file gen helper

Prints /etc/network/interfaces(5) sections for every swp port on the
system, or a single untagged bridge with all swp ports as members.
The output goes to stdout; redirect it to a file under
/etc/network/interfaces.d/ and source that file from
/etc/network/interfaces.

Examples:
  generate-interfaces -s > /etc/network/interfaces.d/swp_defaults
  generate-interfaces -s -m /etc/network/interfaces.d/swp_defaults \\
      > /etc/network/interfaces.d/swp_defaults.new
  generate-interfaces -b > /etc/network/interfaces.d/bridge_untagged
")]
pub struct Cli {
    /// Generate swp defaults file
    #[arg(short = 's', long = "swp-defaults", conflicts_with = "bridge_default")]
    pub swp_defaults: bool,

    /// Generate default untagged bridge
    #[arg(short = 'b', long = "bridge-default")]
    pub bridge_default: bool,

    /// Merge new generated iface content with the old one
    #[arg(short = 'm', long = "merge", value_name = "FILE")]
    pub merge: Option<PathBuf>,

    /// Settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read ports from this port table instead of the configured one
    #[arg(long, value_name = "FILE")]
    pub porttab: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default log filter for the selected verbosity
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }

    /// Run configuration for the selected mode flags
    pub fn generator_config(&self) -> Result<GeneratorConfig, UsageError> {
        GeneratorConfig::new(self.swp_defaults, self.bridge_default, self.merge.clone())
    }
}
