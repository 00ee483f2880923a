//! ifupdown2 interfaces generator core
//!
//! Core types, settings and port table enumeration

pub mod error;
pub mod porttab;
pub mod resolver;
pub mod settings;
pub mod types;

pub use error::{IfGenError, PortTableError, SettingsError, UsageError};
pub use porttab::PortTable;
pub use resolver::MergeResolver;
pub use settings::Settings;
pub use types::*;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, IfGenError>;
