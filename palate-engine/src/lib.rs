//! # palate-engine
//!
//! The integration surface of the Palate core. An [`Engine`] owns one
//! user's ledger and preference cache, wires the learning and context
//! crates together, and exposes the operations callers integrate against:
//! building prompt context, recording feedback, and trend reporting.

pub mod engine;
pub mod store;
pub mod tracing_setup;

pub use engine::{BuiltContext, Engine};
pub use store::{JsonFileStore, MemoryStore};
pub use tracing_setup::init_tracing;
