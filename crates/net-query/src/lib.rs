//! ifupdown2 interfaces generator query integration
//!
//! Lookup of existing interface stanzas through ifquery

pub mod ifquery;

pub use ifquery::{IfQueryResolver, IfQueryResult};
