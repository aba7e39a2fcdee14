//! Observability setup for the Northbound chat service.

pub mod tracing_setup;
