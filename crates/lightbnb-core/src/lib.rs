//! # lightbnb-core
//!
//! Domain layer containing entities, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, rendering, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    NewProperty, NewReservation, NewUser, Property, PropertyListing, Reservation,
    ReservationListing, User,
};
pub use error::DomainError;
pub use traits::{
    clamp_limit, PropertyFilter, PropertyRepository, RepoResult, ReservationRepository,
    UserRepository, DEFAULT_LIMIT, MAX_LIMIT,
};
pub use value_objects::{Cents, IdParseError, PropertyId, ReservationId, UserId};
