//! Cookie-carried session resolution.

pub mod resolver;

pub use resolver::{SessionIdSource, SessionResolver, SystemSessionIdSource};
