//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in lightbnb-core.

mod error;
mod property;
mod property_search;
mod reservation;
mod user;

pub use property::PgPropertyRepository;
pub use property_search::build_search_query;
pub use reservation::PgReservationRepository;
pub use user::PgUserRepository;
