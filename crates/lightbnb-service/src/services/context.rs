//! Service context - dependency container for services
//!
//! Holds the connection pool and the repositories built on it. The pool is
//! passed in explicitly; nothing here is process-global.

use std::sync::Arc;

use lightbnb_common::{AppConfig, AppError, PasswordService};
use lightbnb_core::traits::{
    clamp_limit, PropertyRepository, ReservationRepository, UserRepository, DEFAULT_LIMIT, MAX_LIMIT,
};
use lightbnb_db::{
    create_pool, ping, PgPool, PgPropertyRepository, PgReservationRepository, PgUserRepository,
    PoolConfig,
};
use tracing::{error, info};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Absent when the repositories are not database backed
    pool: Option<PgPool>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    property_repo: Arc<dyn PropertyRepository>,
    reservation_repo: Arc<dyn ReservationRepository>,

    password_service: PasswordService,
    default_limit: i64,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        user_repo: Arc<dyn UserRepository>,
        property_repo: Arc<dyn PropertyRepository>,
        reservation_repo: Arc<dyn ReservationRepository>,
        default_limit: i64,
    ) -> Self {
        Self {
            pool,
            user_repo,
            property_repo,
            reservation_repo,
            password_service: PasswordService::new(),
            default_limit: default_limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Wire the PostgreSQL repositories onto an existing pool
    pub fn from_pool(pool: PgPool, default_limit: i64) -> Self {
        Self::new(
            Some(pool.clone()),
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgPropertyRepository::new(pool.clone())),
            Arc::new(PgReservationRepository::new(pool)),
            default_limit,
        )
    }

    /// Open a pool from configuration and wire the repositories onto it
    ///
    /// # Errors
    /// Returns `AppError::Database` if the pool cannot connect
    pub async fn connect(config: &AppConfig) -> ServiceResult<Self> {
        let pool = create_pool(&PoolConfig::from(&config.database))
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to connect to database");
                ServiceError::App(AppError::Database(e.to_string()))
            })?;

        info!(app = %config.app.name, env = ?config.app.env, "Service context ready");

        Ok(Self::from_pool(pool, config.listings.default_limit))
    }

    /// Check that the database answers; trivially true without a pool
    pub async fn ping(&self) -> ServiceResult<()> {
        match &self.pool {
            Some(pool) => ping(pool)
                .await
                .map_err(|e| ServiceError::App(AppError::Database(e.to_string()))),
            None => Ok(()),
        }
    }

    /// Close the underlying pool, waiting for checked-out connections
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
            info!("Database pool closed");
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if there is one
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the property repository
    pub fn property_repo(&self) -> &dyn PropertyRepository {
        self.property_repo.as_ref()
    }

    /// Get the reservation repository
    pub fn reservation_repo(&self) -> &dyn ReservationRepository {
        self.reservation_repo.as_ref()
    }

    // === Services ===

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// Row cap used when the caller passes none
    pub fn default_limit(&self) -> i64 {
        self.default_limit
    }

    /// Resolve a caller's limit against the configured default
    pub fn limit(&self, limit: Option<i64>) -> i64 {
        clamp_limit(limit.or(Some(self.default_limit)))
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("default_limit", &self.default_limit)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    property_repo: Option<Arc<dyn PropertyRepository>>,
    reservation_repo: Option<Arc<dyn ReservationRepository>>,
    default_limit: i64,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            property_repo: None,
            reservation_repo: None,
            default_limit: DEFAULT_LIMIT,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn property_repo(mut self, repo: Arc<dyn PropertyRepository>) -> Self {
        self.property_repo = Some(repo);
        self
    }

    pub fn reservation_repo(mut self, repo: Arc<dyn ReservationRepository>) -> Self {
        self.reservation_repo = Some(repo);
        self
    }

    pub fn default_limit(mut self, limit: i64) -> Self {
        self.default_limit = limit;
        self
    }

    /// Build the ServiceContext
    ///
    /// Repositories that were not set explicitly are built on the pool.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a repository is missing and there
    /// is no pool to build it from
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self.pool;

        let user_repo = match (self.user_repo, &pool) {
            (Some(repo), _) => repo,
            (None, Some(pool)) => Arc::new(PgUserRepository::new(pool.clone())),
            (None, None) => return Err(ServiceError::validation("user_repo is required")),
        };
        let property_repo = match (self.property_repo, &pool) {
            (Some(repo), _) => repo,
            (None, Some(pool)) => Arc::new(PgPropertyRepository::new(pool.clone())),
            (None, None) => return Err(ServiceError::validation("property_repo is required")),
        };
        let reservation_repo = match (self.reservation_repo, &pool) {
            (Some(repo), _) => repo,
            (None, Some(pool)) => Arc::new(PgReservationRepository::new(pool.clone())),
            (None, None) => return Err(ServiceError::validation("reservation_repo is required")),
        };

        Ok(ServiceContext::new(
            pool,
            user_repo,
            property_repo,
            reservation_repo,
            self.default_limit,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
