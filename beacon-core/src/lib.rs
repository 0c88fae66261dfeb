//! Beacon Core
//!
//! Core types for the Beacon CI dashboard.
//!
//! This crate contains the domain records served by the CI API (jobs, builds,
//! build resources, pipelines) and the pure derivations the dashboard pages
//! compute from them.

pub mod domain;
