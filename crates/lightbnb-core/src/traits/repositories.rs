//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use serde::Deserialize;

use crate::entities::{
    NewProperty, NewReservation, Property, PropertyListing, Reservation, ReservationListing, User,
};
use crate::error::DomainError;
use crate::value_objects::{Cents, PropertyId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Row cap applied when the caller gives none
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest row cap a caller may request
pub const MAX_LIMIT: i64 = 100;

/// Resolve an optional caller limit into `0..=MAX_LIMIT`
///
/// A limit of 0 is honoured and yields no rows.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(0, MAX_LIMIT)
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Insert a user and return the generated id
    async fn create(&self, name: &str, email: &str, password_hash: &str) -> RepoResult<UserId>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Property Repository
// ============================================================================

/// Optional search filters for properties
///
/// Every provided field narrows the result set; the filters are ANDed.
/// Prices are whole dollars and get compared against the nightly cost in cents.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PropertyFilter {
    /// Case-sensitive substring of the city name
    pub city: Option<String>,
    pub owner_id: Option<UserId>,
    pub minimum_price_per_night: Option<i64>,
    pub maximum_price_per_night: Option<i64>,
    /// Lower bound on the average review rating
    pub minimum_rating: Option<f64>,
}

impl PropertyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn min_price(mut self, dollars: i64) -> Self {
        self.minimum_price_per_night = Some(dollars);
        self
    }

    pub fn max_price(mut self, dollars: i64) -> Self {
        self.maximum_price_per_night = Some(dollars);
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// City filter, ignoring blank input
    pub fn city_pattern(&self) -> Option<&str> {
        self.city.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }

    /// Price bounds converted to cents
    pub fn price_bounds(&self) -> Result<(Option<Cents>, Option<Cents>), DomainError> {
        let to_cents = |dollars: Option<i64>, label: &str| -> Result<Option<Cents>, DomainError> {
            match dollars {
                None => Ok(None),
                Some(d) if d < 0 => Err(DomainError::ValidationError(format!(
                    "{label} price cannot be negative"
                ))),
                Some(d) => Cents::from_dollars(d).map(Some).ok_or_else(|| {
                    DomainError::ValidationError(format!("{label} price is out of range"))
                }),
            }
        };

        let min = to_cents(self.minimum_price_per_night, "Minimum")?;
        let max = to_cents(self.maximum_price_per_night, "Maximum")?;

        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(DomainError::InvalidPriceRange { min, max });
            }
        }

        Ok((min, max))
    }

    /// Check the filter without touching the database
    pub fn validate(&self) -> Result<(), DomainError> {
        self.price_bounds()?;
        if let Some(rating) = self.minimum_rating {
            if !rating.is_finite() || rating < 0.0 {
                return Err(DomainError::ValidationError(
                    "Minimum rating must be a non-negative number".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Search properties matching every filter, cheapest first
    async fn find_all(&self, filter: &PropertyFilter, limit: i64) -> RepoResult<Vec<PropertyListing>>;

    /// Find a single property with its rating
    async fn find_by_id(&self, id: PropertyId) -> RepoResult<Option<PropertyListing>>;

    /// Insert a property and return the stored row
    async fn create(&self, property: &NewProperty) -> RepoResult<Property>;
}

// ============================================================================
// Reservation Repository
// ============================================================================

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// List a guest's reservations with property details, earliest stay first
    async fn find_by_guest(&self, guest_id: UserId, limit: i64) -> RepoResult<Vec<ReservationListing>>;

    /// Insert a reservation and return the stored row
    async fn create(&self, reservation: &NewReservation) -> RepoResult<Reservation>;
}
