//! Property entity - a rentable listing

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::value_objects::{Cents, PropertyId, UserId};

/// Property row as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: Cents,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

/// Property together with the mean rating of its reviews
///
/// `average_rating` is `None` when nobody has reviewed the property yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Input for listing a new property
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProperty {
    pub owner_id: UserId,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    pub description: String,

    #[validate(length(min = 1, max = 255, message = "Thumbnail URL must be 1-255 characters"))]
    pub thumbnail_photo_url: String,

    #[validate(length(min = 1, max = 255, message = "Cover photo URL must be 1-255 characters"))]
    pub cover_photo_url: String,

    #[validate(custom(function = "non_negative_cost"))]
    pub cost_per_night: Cents,

    #[validate(length(min = 1, max = 255))]
    pub street: String,

    #[validate(length(min = 1, max = 255))]
    pub city: String,

    #[validate(length(min = 1, max = 255))]
    pub province: String,

    #[validate(length(min = 1, max = 255))]
    pub post_code: String,

    #[validate(length(min = 1, max = 255))]
    pub country: String,

    #[validate(range(min = 0, message = "Parking spaces cannot be negative"))]
    pub parking_spaces: i32,

    #[validate(range(min = 0, message = "Bathrooms cannot be negative"))]
    pub number_of_bathrooms: i32,

    #[validate(range(min = 0, message = "Bedrooms cannot be negative"))]
    pub number_of_bedrooms: i32,
}

fn non_negative_cost(cost: &Cents) -> Result<(), ValidationError> {
    if cost.is_negative() {
        let mut err = ValidationError::new("negative_cost");
        err.message = Some("Cost per night cannot be negative".into());
        return Err(err);
    }
    Ok(())
}
