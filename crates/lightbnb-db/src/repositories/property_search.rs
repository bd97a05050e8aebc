//! Property search query builder
//!
//! Each filter the caller sets contributes one predicate; the predicates are
//! joined under a single `WHERE`. The rating filter applies to the aggregate,
//! so it goes into `HAVING` after the grouping.

use sqlx::{Postgres, QueryBuilder};

use lightbnb_core::error::DomainError;
use lightbnb_core::traits::PropertyFilter;
use lightbnb_core::value_objects::Cents;

/// Select list shared by every property read. Reviews hang off reservations,
/// so both joins are outer joins to keep unreviewed properties.
pub(crate) const PROPERTY_SELECT: &str = r"
    SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating
    FROM properties
    LEFT JOIN reservations ON reservations.property_id = properties.id
    LEFT JOIN property_reviews ON property_reviews.reservation_id = reservations.id
";

enum Predicate {
    CityContains(String),
    Owner(i32),
    PriceBetween(Cents, Cents),
    PriceAtLeast(Cents),
    PriceAtMost(Cents),
}

impl Predicate {
    fn push_to(self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::CityContains(pattern) => {
                builder.push("properties.city LIKE ").push_bind(pattern);
            }
            Self::Owner(owner_id) => {
                builder.push("properties.owner_id = ").push_bind(owner_id);
            }
            Self::PriceBetween(min, max) => {
                builder
                    .push("properties.cost_per_night BETWEEN ")
                    .push_bind(min.into_inner())
                    .push(" AND ")
                    .push_bind(max.into_inner());
            }
            Self::PriceAtLeast(min) => {
                builder
                    .push("properties.cost_per_night >= ")
                    .push_bind(min.into_inner());
            }
            Self::PriceAtMost(max) => {
                builder
                    .push("properties.cost_per_night <= ")
                    .push_bind(max.into_inner());
            }
        }
    }
}

/// Escape LIKE metacharacters so the city is matched literally
fn like_contains(city: &str) -> String {
    let mut pattern = String::with_capacity(city.len() + 2);
    pattern.push('%');
    for c in city.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn predicates(filter: &PropertyFilter) -> Result<Vec<Predicate>, DomainError> {
    let mut predicates = Vec::new();

    if let Some(city) = filter.city_pattern() {
        predicates.push(Predicate::CityContains(like_contains(city)));
    }

    if let Some(owner_id) = filter.owner_id {
        predicates.push(Predicate::Owner(owner_id.into_inner()));
    }

    match filter.price_bounds()? {
        (Some(min), Some(max)) => predicates.push(Predicate::PriceBetween(min, max)),
        (Some(min), None) => predicates.push(Predicate::PriceAtLeast(min)),
        (None, Some(max)) => predicates.push(Predicate::PriceAtMost(max)),
        (None, None) => {}
    }

    Ok(predicates)
}

/// Build the search statement for `filter`, cheapest first, capped at `limit`
pub fn build_search_query(
    filter: &PropertyFilter,
    limit: i64,
) -> Result<QueryBuilder<'static, Postgres>, DomainError> {
    filter.validate()?;

    let mut builder = QueryBuilder::new(PROPERTY_SELECT);

    for (i, predicate) in predicates(filter)?.into_iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        predicate.push_to(&mut builder);
    }

    builder.push(" GROUP BY properties.id");

    if let Some(rating) = filter.minimum_rating {
        builder
            .push(" HAVING avg(property_reviews.rating) >= ")
            .push_bind(rating);
    }

    builder
        .push(" ORDER BY properties.cost_per_night")
        .push(" LIMIT ")
        .push_bind(limit);

    Ok(builder)
}
