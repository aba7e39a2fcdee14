//! Infrastructure layer for the Northbound chat service.
//!
//! Contains implementations of the port traits defined in `northbound-core`
//! (the ZeroDB REST client backing both the knowledge base and the memory
//! store) and the `northbound.toml` configuration loader.

pub mod config;
pub mod zerodb;
