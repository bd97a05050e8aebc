//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions turning database rows into domain objects.

mod property;
mod reservation;
mod user;
