//! # lightbnb-views
//!
//! HTML fragments for the browser UI. Everything here is a pure function of
//! its input.

pub mod listing;

pub use listing::{create_listing, render_reservation, LISTING_DATE_FORMAT};
