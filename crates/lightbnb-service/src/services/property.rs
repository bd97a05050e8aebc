//! Property service
//!
//! Searching and listing rentable properties.

use lightbnb_core::entities::{NewProperty, Property, PropertyListing};
use lightbnb_core::traits::PropertyFilter;
use lightbnb_core::value_objects::PropertyId;
use tracing::{error, info, instrument, warn};
use validator::Validate;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Property service
pub struct PropertyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PropertyService<'a> {
    /// Create a new PropertyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Search properties matching every filter, cheapest first
    ///
    /// `limit` falls back to the configured default and is clamped to the
    /// allowed range.
    #[instrument(skip(self))]
    pub async fn get_all_properties(
        &self,
        filter: PropertyFilter,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<PropertyListing>> {
        filter.validate().map_err(|e| {
            warn!(error = %e, "Rejected property filter");
            ServiceError::from(e)
        })?;

        let limit = self.ctx.limit(limit);
        let listings = self
            .ctx
            .property_repo()
            .find_all(&filter, limit)
            .await
            .map_err(|e| {
                error!(error = %e, "Property search failed");
                ServiceError::from(e)
            })?;

        info!(count = listings.len(), limit, "Property search complete");
        Ok(listings)
    }

    /// Get a single property with its rating
    #[instrument(skip(self))]
    pub async fn get_property(&self, property_id: PropertyId) -> ServiceResult<Option<PropertyListing>> {
        self.ctx
            .property_repo()
            .find_by_id(property_id)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to load property");
                ServiceError::from(e)
            })
    }

    /// List a new property and return the stored row
    #[instrument(skip(self, property), fields(owner_id = %property.owner_id))]
    pub async fn add_property(&self, property: NewProperty) -> ServiceResult<Property> {
        property.validate().map_err(|e| {
            warn!(error = %e, "Rejected new property");
            ServiceError::from(e)
        })?;

        let stored = self
            .ctx
            .property_repo()
            .create(&property)
            .await
            .map_err(|e| {
                if e.is_conflict() || e.is_validation() {
                    warn!(error = %e, "Property insert rejected");
                } else {
                    error!(error = %e, "Failed to insert property");
                }
                ServiceError::from(e)
            })?;

        info!(property_id = %stored.id, "Property listed");
        Ok(stored)
    }
}
