//! Port definitions (trait abstractions) for the collaborators of library
//! loading.
//!
//! # Design Rules
//!
//! - Ports use only domain types and `std::io`
//! - Implementations live in `systemhook-runtime`; tests use in-memory fakes

pub mod native_loader;
pub mod resource_provider;

pub use native_loader::NativeLoader;
pub use resource_provider::{ResourceProvider, ResourceStream};
