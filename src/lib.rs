//! Survey API - survey form creation and response collection.
//!
//! Surveys are created with a typed question list, respondents fill them,
//! and stored responses can be listed by target audience ranked by their
//! star-rating answer.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
