//! External service providers
//!
//! Defines the search and summary provider traits and their HTTP-backed
//! implementations.

mod loader;
mod traits;

pub mod google;
pub mod huggingface;

pub use loader::ProviderLoader;
pub use traits::*;
