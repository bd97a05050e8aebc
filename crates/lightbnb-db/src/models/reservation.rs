//! Reservation database models

use chrono::NaiveDate;
use sqlx::FromRow;

use super::property::PropertyModel;

/// Database model for reservations table
#[derive(Debug, Clone, FromRow)]
pub struct ReservationModel {
    pub id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_id: i32,
    pub guest_id: i32,
}

/// Reservation joined with its property
///
/// The property's columns keep their names, so the reservation key comes back
/// as `reservation_id`.
#[derive(Debug, Clone, FromRow)]
pub struct ReservationListingModel {
    pub reservation_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guest_id: i32,
    #[sqlx(flatten)]
    pub property: PropertyModel,
    pub average_rating: Option<f64>,
}
