//! Property model -> entity mappers

use lightbnb_core::entities::{Property, PropertyListing};
use lightbnb_core::value_objects::{Cents, PropertyId, UserId};

use crate::models::{PropertyListingModel, PropertyModel};

impl From<PropertyModel> for Property {
    fn from(model: PropertyModel) -> Self {
        Property {
            id: PropertyId::new(model.id),
            owner_id: UserId::new(model.owner_id),
            title: model.title,
            description: model.description,
            thumbnail_photo_url: model.thumbnail_photo_url,
            cover_photo_url: model.cover_photo_url,
            cost_per_night: Cents::from(model.cost_per_night),
            street: model.street,
            city: model.city,
            province: model.province,
            post_code: model.post_code,
            country: model.country,
            parking_spaces: model.parking_spaces,
            number_of_bathrooms: model.number_of_bathrooms,
            number_of_bedrooms: model.number_of_bedrooms,
        }
    }
}

impl From<PropertyListingModel> for PropertyListing {
    fn from(model: PropertyListingModel) -> Self {
        PropertyListing {
            property: Property::from(model.property),
            average_rating: model.average_rating,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_model(id: i32) -> PropertyModel {
    PropertyModel {
        id,
        owner_id: 7,
        title: "Habit mix".to_string(),
        description: "description".to_string(),
        thumbnail_photo_url: "thumb.jpg".to_string(),
        cover_photo_url: "cover.jpg".to_string(),
        cost_per_night: 12550,
        street: "1 Main St".to_string(),
        city: "Vancouver".to_string(),
        province: "BC".to_string(),
        post_code: "V5K".to_string(),
        country: "Canada".to_string(),
        parking_spaces: 2,
        number_of_bathrooms: 1,
        number_of_bedrooms: 3,
    }
}
