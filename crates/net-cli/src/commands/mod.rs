//! CLI commands

pub mod bridge_default;
pub mod swp_defaults;

pub use bridge_default::BridgeDefaultCommand;
pub use swp_defaults::SwpDefaultsCommand;
