//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and validates input
//! before handing it to a repository.

pub mod context;
pub mod error;
pub mod property;
pub mod reservation;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use property::PropertyService;
pub use reservation::ReservationService;
pub use user::UserService;
