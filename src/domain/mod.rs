//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `survey` - Survey and Response entities, validation rules, errors

pub mod survey;
