//! Property listing card

use chrono::NaiveDate;
use maud::{html, Markup};

use lightbnb_core::entities::{Property, PropertyListing, ReservationListing};

/// Abbreviated month, day and year, e.g. `Apr 20, 2022`
pub const LISTING_DATE_FORMAT: &str = "%b %-d, %Y";

// Placeholder stay offered by the booking form
const FORM_START: &str = "2022-04-20";
const FORM_END: &str = "2022-04-21";
const FORM_MAX: &str = "2023-12-31";

/// Render the listing card for a property
///
/// `stay` adds the reserved date range under the room counts.
pub fn create_listing(listing: &PropertyListing, stay: Option<(NaiveDate, NaiveDate)>) -> String {
    card(&listing.property, listing.average_rating, stay).into_string()
}

/// Render a guest's reservation as a listing card with its dates
pub fn render_reservation(listing: &ReservationListing) -> String {
    let stay = (listing.reservation.start_date, listing.reservation.end_date);
    card(&listing.property, listing.average_rating, Some(stay)).into_string()
}

fn card(property: &Property, average_rating: Option<f64>, stay: Option<(NaiveDate, NaiveDate)>) -> Markup {
    html! {
        article."property-listing" {
            section."property-listing__preview-image" {
                img src=(property.thumbnail_photo_url) alt="house";
            }
            section."property-listing__details" {
                h3."property-listing__title" { (property.title) }
                ul."property-listing__details" {
                    li { "number_of_bedrooms: " (property.number_of_bedrooms) }
                    li { "number_of_bathrooms: " (property.number_of_bathrooms) }
                    li { "parking_spaces: " (property.parking_spaces) }
                }
                @if let Some((start, end)) = stay {
                    p { (date_range(start, end)) }
                }
                footer."property-listing__footer" {
                    div."property-listing__rating" { (rating_label(average_rating)) "/5 stars" }
                    div."property-listing__price" { "$" (property.cost_per_night.to_string()) "/night" }
                }
                form."form-example" action="/api/reservation" method="post" {
                    div."form-example" {
                        input type="hidden" name="property_id" value=(property.id.to_string());
                    }
                    div."form-example" {
                        input type="date" id="start" name="start_date"
                            value=(FORM_START) min=(FORM_START) max=(FORM_MAX);
                    }
                    div."form-example" {
                        input type="date" id="end" name="end_date"
                            value=(FORM_END) min=(FORM_START) max=(FORM_MAX);
                    }
                    div."form-example" {
                        input type="submit" value="Make Reservation!";
                    }
                }
            }
        }
    }
}

fn date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{} - {}",
        start.format(LISTING_DATE_FORMAT),
        end.format(LISTING_DATE_FORMAT)
    )
}

/// Two decimals at most, no trailing zeros, 0 when unrated
fn rating_label(average_rating: Option<f64>) -> String {
    // f64 Display already drops trailing zeros
    let rounded = average_rating.map_or(0.0, |rating| (rating * 100.0).round() / 100.0);
    rounded.to_string()
}
