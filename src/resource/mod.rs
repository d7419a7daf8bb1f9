//! Resource entities held by the library
//!
//! A resource is plain data with no behavior beyond a few read helpers.
//! Optional fields (`isbn`, `pages`, `rating`) are only present for the
//! resource types they apply to.

mod types;

pub use types::{Resource, ResourceType};
