//! ifupdown2 interfaces generator
//!
//! Generation of swp defaults and untagged bridge interfaces(5) documents

pub mod bridge;
pub mod header;
pub mod swp_defaults;

pub use bridge::{
    format_bridge_ports, generate_bridge_default, wrap_bridge_ports, BRIDGE_NAME,
    BRIDGE_PORTS_PER_LINE,
};
pub use header::{BRIDGE_DEFAULT_HEADER, SWP_DEFAULTS_HEADER};
pub use swp_defaults::SwpDefaultsGenerator;
