//! PostgreSQL implementation of ReservationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lightbnb_core::entities::{NewReservation, Reservation, ReservationListing};
use lightbnb_core::traits::{RepoResult, ReservationRepository};
use lightbnb_core::value_objects::UserId;

use crate::models::{ReservationListingModel, ReservationModel};

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of ReservationRepository
#[derive(Clone)]
pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    /// Create a new PgReservationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    #[instrument(skip(self))]
    async fn find_by_guest(&self, guest_id: UserId, limit: i64) -> RepoResult<Vec<ReservationListing>> {
        // Ratings are averaged per property across all of its reservations,
        // not just the guest's own.
        let results = sqlx::query_as::<_, ReservationListingModel>(
            r"
            SELECT reservations.id AS reservation_id,
                   reservations.start_date,
                   reservations.end_date,
                   reservations.guest_id,
                   properties.*,
                   ratings.average_rating
            FROM reservations
            JOIN properties ON properties.id = reservations.property_id
            LEFT JOIN (
                SELECT rated.property_id, avg(property_reviews.rating)::float8 AS average_rating
                FROM property_reviews
                JOIN reservations rated ON rated.id = property_reviews.reservation_id
                GROUP BY rated.property_id
            ) ratings ON ratings.property_id = properties.id
            WHERE reservations.guest_id = $1
            ORDER BY reservations.start_date, reservations.id
            LIMIT $2
            ",
        )
        .bind(guest_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReservationListing::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, reservation: &NewReservation) -> RepoResult<Reservation> {
        let result = sqlx::query_as::<_, ReservationModel>(
            r"
            INSERT INTO reservations (start_date, end_date, property_id, guest_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, start_date, end_date, property_id, guest_id
            ",
        )
        .bind(reservation.start_date)
        .bind(reservation.end_date)
        .bind(reservation.property_id.into_inner())
        .bind(reservation.guest_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_foreign_key_violation)?;

        Ok(Reservation::from(result))
    }
}
