//! Property database models

use sqlx::FromRow;

/// Database model for properties table
#[derive(Debug, Clone, FromRow)]
pub struct PropertyModel {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

/// Property row plus `avg(rating)` from the review join
#[derive(Debug, Clone, FromRow)]
pub struct PropertyListingModel {
    #[sqlx(flatten)]
    pub property: PropertyModel,
    pub average_rating: Option<f64>,
}
