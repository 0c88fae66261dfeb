//! Core domain types
//!
//! This module contains the records the CI API returns and the dashboard
//! consumes. They mirror the API's JSON shape so they can be deserialized
//! directly from responses and serialized back out for logging.

pub mod build;
pub mod group;
pub mod job;
pub mod pipeline;
pub mod resource;
