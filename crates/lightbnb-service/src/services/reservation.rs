//! Reservation service
//!
//! Booking stays and listing a guest's bookings.

use lightbnb_core::entities::{NewReservation, Reservation, ReservationListing};
use lightbnb_core::value_objects::UserId;
use tracing::{error, info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reservation service
pub struct ReservationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReservationService<'a> {
    /// Create a new ReservationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// A guest's reservations with property details, earliest stay first
    #[instrument(skip(self))]
    pub async fn get_all_reservations(
        &self,
        guest_id: UserId,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<ReservationListing>> {
        let limit = self.ctx.limit(limit);
        self.ctx
            .reservation_repo()
            .find_by_guest(guest_id, limit)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to load reservations");
                ServiceError::from(e)
            })
    }

    /// Book a stay and return the stored row
    #[instrument(skip(self))]
    pub async fn add_reservation(&self, reservation: NewReservation) -> ServiceResult<Reservation> {
        reservation.validate_dates().map_err(|e| {
            warn!(error = %e, "Rejected reservation");
            ServiceError::from(e)
        })?;

        let property_exists = self
            .ctx
            .property_repo()
            .find_by_id(reservation.property_id)
            .await?
            .is_some();
        if !property_exists {
            warn!("Reservation for unknown property");
            return Err(ServiceError::not_found("Property", reservation.property_id));
        }

        let stored = self
            .ctx
            .reservation_repo()
            .create(&reservation)
            .await
            .map_err(|e| {
                if e.is_conflict() {
                    warn!(error = %e, "Reservation insert rejected");
                } else {
                    error!(error = %e, "Failed to insert reservation");
                }
                ServiceError::from(e)
            })?;

        info!(reservation_id = %stored.id, nights = stored.nights(), "Reservation created");
        Ok(stored)
    }
}
