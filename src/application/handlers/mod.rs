//! Command and query handlers.

pub mod survey;
