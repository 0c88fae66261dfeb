//! Service Module
//!
//! Business logic layer for the web server.
//! Services compose data from the CI API into page view models.

pub mod build_page;
