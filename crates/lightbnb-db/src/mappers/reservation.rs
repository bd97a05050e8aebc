//! Reservation model -> entity mappers

use lightbnb_core::entities::{Property, Reservation, ReservationListing};
use lightbnb_core::value_objects::{PropertyId, ReservationId, UserId};

use crate::models::{ReservationListingModel, ReservationModel};

impl From<ReservationModel> for Reservation {
    fn from(model: ReservationModel) -> Self {
        Reservation {
            id: ReservationId::new(model.id),
            start_date: model.start_date,
            end_date: model.end_date,
            property_id: PropertyId::new(model.property_id),
            guest_id: UserId::new(model.guest_id),
        }
    }
}

impl From<ReservationListingModel> for ReservationListing {
    fn from(model: ReservationListingModel) -> Self {
        let property = Property::from(model.property);
        ReservationListing {
            reservation: Reservation {
                id: ReservationId::new(model.reservation_id),
                start_date: model.start_date,
                end_date: model.end_date,
                property_id: property.id,
                guest_id: UserId::new(model.guest_id),
            },
            property,
            average_rating: model.average_rating,
        }
    }
}
