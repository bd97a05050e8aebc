//! Value objects - immutable types that represent domain concepts

mod ids;
mod money;

pub use ids::{IdParseError, PropertyId, ReservationId, UserId};
pub use money::Cents;
