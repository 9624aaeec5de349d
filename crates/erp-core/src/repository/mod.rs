//! Repository Layer
//!
//! Data access abstractions and the REST implementation.

mod client;
mod rest;
mod traits;

#[cfg(test)]
mod tests;

pub use client::{backend_error, decode_body, ApiClient};
pub use rest::{Resource, RestRepository};
pub use traits::Repository;
