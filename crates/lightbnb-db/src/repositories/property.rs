//! PostgreSQL implementation of PropertyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use lightbnb_core::entities::{NewProperty, Property, PropertyListing};
use lightbnb_core::error::DomainError;
use lightbnb_core::traits::{PropertyFilter, PropertyRepository, RepoResult};
use lightbnb_core::value_objects::PropertyId;

use crate::models::{PropertyListingModel, PropertyModel};

use super::error::{map_db_error, map_foreign_key_violation};
use super::property_search::{build_search_query, PROPERTY_SELECT};

/// PostgreSQL implementation of PropertyRepository
#[derive(Clone)]
pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    /// Create a new PgPropertyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    #[instrument(skip(self))]
    async fn find_all(&self, filter: &PropertyFilter, limit: i64) -> RepoResult<Vec<PropertyListing>> {
        let mut query = build_search_query(filter, limit)?;
        debug!(sql = query.sql(), "Searching properties");

        let results = query
            .build_query_as::<PropertyListingModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(PropertyListing::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PropertyId) -> RepoResult<Option<PropertyListing>> {
        let sql = format!("{PROPERTY_SELECT} WHERE properties.id = $1 GROUP BY properties.id");

        let result = sqlx::query_as::<_, PropertyListingModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(PropertyListing::from))
    }

    #[instrument(skip(self, property), fields(owner_id = %property.owner_id, title = %property.title))]
    async fn create(&self, property: &NewProperty) -> RepoResult<Property> {
        let cost_per_night = i32::try_from(property.cost_per_night.into_inner()).map_err(|_| {
            DomainError::ValidationError("Cost per night is out of range".to_string())
        })?;

        let result = sqlx::query_as::<_, PropertyModel>(
            r"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, street, city, province, post_code, country,
                parking_spaces, number_of_bathrooms, number_of_bedrooms
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            ",
        )
        .bind(property.owner_id.into_inner())
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(cost_per_night)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .bind(&property.country)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .fetch_one(&self.pool)
        .await
        .map_err(map_foreign_key_violation)?;

        Ok(Property::from(result))
    }
}
