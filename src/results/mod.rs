//! Result types shared by providers, the orchestrator and the web layer.

mod types;

pub use types::*;
