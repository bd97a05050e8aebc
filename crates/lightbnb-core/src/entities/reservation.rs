//! Reservation entity - a guest's booked stay at a property

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{PropertyId, ReservationId, UserId};

use super::property::Property;

/// Reservation row as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_id: PropertyId,
    pub guest_id: UserId,
}

impl Reservation {
    /// Number of nights booked
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// Reservation joined with its property and the property's mean rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationListing {
    pub reservation: Reservation,
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Input for booking a stay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_id: PropertyId,
    pub guest_id: UserId,
}

impl NewReservation {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        property_id: PropertyId,
        guest_id: UserId,
    ) -> Self {
        Self {
            start_date,
            end_date,
            property_id,
            guest_id,
        }
    }

    /// Check that the stay ends after it starts
    pub fn validate_dates(&self) -> Result<(), DomainError> {
        if self.start_date < self.end_date {
            Ok(())
        } else {
            Err(DomainError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            })
        }
    }
}
