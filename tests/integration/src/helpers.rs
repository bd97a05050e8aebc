//! Test helpers for integration tests
//!
//! Provides configuration loading and a service context bound to the
//! test database.

use anyhow::Result;
use lightbnb_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use lightbnb_core::Reservation;
use lightbnb_service::ServiceContext;
use sqlx::PgPool;

/// Service context connected to the test database
pub struct TestDb {
    pub ctx: ServiceContext,
}

impl TestDb {
    /// Connect using the environment configuration
    pub async fn start() -> Result<Self> {
        let config = test_config()?;

        // Several tests share the process; only the first install wins
        let _ = try_init_tracing_with_config(&TracingConfig::development());

        let ctx = ServiceContext::connect(&config)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to connect: {e}"))?;

        Ok(Self { ctx })
    }

    /// Close the pool
    pub async fn stop(self) {
        self.ctx.close().await;
    }
}

/// Leave a review on a reservation's property
///
/// The data layer never writes reviews, so tests seed them directly.
pub async fn add_review(pool: &PgPool, reservation: &Reservation, rating: i16) -> Result<()> {
    sqlx::query(
        "INSERT INTO property_reviews (guest_id, property_id, reservation_id, rating, message) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(reservation.guest_id.into_inner())
    .bind(reservation.property_id.into_inner())
    .bind(reservation.id.into_inner())
    .bind(rating)
    .bind("message")
    .execute(pool)
    .await?;

    Ok(())
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    // Load from environment or use defaults
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}
