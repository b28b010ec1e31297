//! Adapters - Implementations of port interfaces.
//!
//! - `http` - axum REST endpoints
//! - `mongo` - MongoDB repositories

pub mod http;
pub mod mongo;
