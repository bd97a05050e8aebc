//! Repository traits - interfaces for data access

mod repositories;

pub use repositories::{
    clamp_limit, PropertyFilter, PropertyRepository, RepoResult, ReservationRepository,
    UserRepository, DEFAULT_LIMIT, MAX_LIMIT,
};
