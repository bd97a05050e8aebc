//! Integration test utilities for the LightBnB data layer
//!
//! This crate provides helpers for running end-to-end tests against
//! a live PostgreSQL database that already has the LightBnB schema.

pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
