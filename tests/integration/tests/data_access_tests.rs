//! Data access integration tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the LightBnB schema loaded
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test data_access_tests

use integration_tests::{
    add_review, check_test_env, date, property_in, unique_suffix, unique_user, TestDb,
};
use lightbnb_core::{DomainError, NewReservation, PropertyFilter, PropertyId, UserId};
use lightbnb_service::{PropertyService, ReservationService, ServiceError, UserService};
use lightbnb_views::create_listing;

#[tokio::test]
async fn test_database_answers() {
    if !check_test_env() {
        return;
    }

    let db = TestDb::start().await.expect("Failed to connect");
    db.ctx.ping().await.unwrap();
    db.stop().await;
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_add_user_round_trip() {
    if !check_test_env() {
        return;
    }

    let db = TestDb::start().await.expect("Failed to connect");
    let users = UserService::new(&db.ctx);
    let new_user = unique_user();
    let email = new_user.email.clone();

    let id = users.add_user(new_user).await.unwrap();
    let found = users.get_user_with_email(&email).await.unwrap().unwrap();
    assert_eq!(found.id, id);
    assert_eq!(found.email, email);

    let by_id = users.get_user_with_id(id).await.unwrap().unwrap();
    assert_eq!(by_id, found);

    db.stop().await;
}

#[tokio::test]
async fn test_unknown_email_is_none() {
    if !check_test_env() {
        return;
    }

    let db = TestDb::start().await.expect("Failed to connect");
    let email = format!("missing{}@example.com", unique_suffix());

    let found = UserService::new(&db.ctx)
        .get_user_with_email(&email)
        .await
        .unwrap();
    assert!(found.is_none());

    db.stop().await;
}

#[tokio::test]
async fn test_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let db = TestDb::start().await.expect("Failed to connect");
    let users = UserService::new(&db.ctx);
    let new_user = unique_user();

    users.add_user(new_user.clone()).await.unwrap();
    let err = users.add_user(new_user).await.unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::EmailAlreadyExists)));

    db.stop().await;
}

#[tokio::test]
async fn test_authenticate_against_stored_hash() {
    if !check_test_env() {
        return;
    }

    let db = TestDb::start().await.expect("Failed to connect");
    let users = UserService::new(&db.ctx);
    let new_user = unique_user();
    let (email, password) = (new_user.email.clone(), new_user.password.clone());

    let id = users.add_user(new_user).await.unwrap();
    assert_eq!(users.authenticate(&email, &password).await.unwrap().id, id);
    assert!(users.authenticate(&email, "not the password").await.is_err());

    db.stop().await;
}

// ============================================================================
// Properties
// ============================================================================

#[tokio::test]
async fn test_search_without_filters_is_sorted_and_capped() {
    if !check_test_env() {
        return;
    }

    let db = TestDb::start().await.expect("Failed to connect");

    let listings = PropertyService::new(&db.ctx)
        .get_all_properties(PropertyFilter::new(), Some(5))
        .await
        .unwrap();

    assert!(listings.len() <= 5);
    assert!(listings
        .windows(2)
        .all(|w| w[0].property.cost_per_night <= w[1].property.cost_per_night));

    db.stop().await;
}

#[tokio::test]
async fn test_search_filters() {
    if !check_test_env() {
        return;
    }

    let db = TestDb::start().await.expect("Failed to connect");
    let owner = UserService::new(&db.ctx).add_user(unique_user()).await.unwrap();
    let properties = PropertyService::new(&db.ctx);

    let city = format!("Testville{}", unique_suffix());
    for (town, cost) in [
        (city.clone(), 4_999),
        (city.clone(), 5_000),
        (format!("North {city}"), 15_000),
        (city.clone(), 15_001),
        ("Elsewhere".to_string(), 9_000),
    ] {
        properties.add_property(property_in(owner, &town, cost)).await.unwrap();
    }

    let by_city = properties
        .get_all_properties(PropertyFilter::new().city(city.clone()), None)
        .await
        .unwrap();
    assert_eq!(by_city.len(), 4);
    assert!(by_city.iter().all(|l| l.property.city.contains(&city)));

    let in_range = properties
        .get_all_properties(
            PropertyFilter::new().owner(owner).min_price(50).max_price(150),
            None,
        )
        .await
        .unwrap();
    let costs: Vec<i64> = in_range
        .iter()
        .map(|l| l.property.cost_per_night.into_inner())
        .collect();
    assert_eq!(costs, vec![5_000, 9_000, 15_000]);

    // Fresh properties have no reviews yet
    let rated = properties
        .get_all_properties(PropertyFilter::new().owner(owner).min_rating(1.0), None)
        .await
        .unwrap();
    assert!(rated.is_empty());

    db.stop().await;
}

#[tokio::test]
async fn test_search_min_rating_uses_review_average() {
    if !check_test_env() {
        return;
    }

    let db = TestDb::start().await.expect("Failed to connect");
    let pool = db.ctx.pool().expect("database-backed context").clone();
    let owner = UserService::new(&db.ctx).add_user(unique_user()).await.unwrap();
    let guest = UserService::new(&db.ctx).add_user(unique_user()).await.unwrap();
    let properties = PropertyService::new(&db.ctx);
    let reservations = ReservationService::new(&db.ctx);

    let city = format!("Reviewville{}", unique_suffix());
    let loved = properties.add_property(property_in(owner, &city, 8_000)).await.unwrap();
    let panned = properties.add_property(property_in(owner, &city, 6_000)).await.unwrap();

    for (property, ratings) in [(&loved, [5, 4]), (&panned, [2, 2])] {
        for (n, rating) in ratings.into_iter().enumerate() {
            let start = date("2023-03-01") + chrono::Days::new(10 * n as u64);
            let stay = reservations
                .add_reservation(NewReservation::new(
                    start,
                    start + chrono::Days::new(3),
                    property.id,
                    guest,
                ))
                .await
                .unwrap();
            add_review(&pool, &stay, rating).await.unwrap();
        }
    }

    let well_rated = properties
        .get_all_properties(PropertyFilter::new().owner(owner).min_rating(4.0), None)
        .await
        .unwrap();
    assert_eq!(well_rated.len(), 1);
    assert_eq!(well_rated[0].property.id, loved.id);
    let average = well_rated[0].average_rating.unwrap();
    assert!((average - 4.5).abs() < 1e-9);

    let any_rating = properties
        .get_all_properties(PropertyFilter::new().owner(owner).min_rating(1.0), None)
        .await
        .unwrap();
    let ids: Vec<_> = any_rating.iter().map(|l| l.property.id).collect();
    assert_eq!(ids, vec![panned.id, loved.id]);

    db.stop().await;
}

#[tokio::test]
async fn test_add_property_returns_row() {
    if !check_test_env() {
        return;
    }

    let db = TestDb::start().await.expect("Failed to connect");
    let owner = UserService::new(&db.ctx).add_user(unique_user()).await.unwrap();
    let properties = PropertyService::new(&db.ctx);

    let stored = properties
        .add_property(property_in(owner, "Kelowna", 12_550))
        .await
        .unwrap();
    assert_eq!(stored.owner_id, owner);
    assert_eq!(stored.cost_per_night.into_inner(), 12_550);

    let listing = properties.get_property(stored.id).await.unwrap().unwrap();
    assert_eq!(listing.property, stored);
    assert!(create_listing(&listing, None).contains("$125.5/night"));

    db.stop().await;
}

#[tokio::test]
async fn test_add_property_unknown_owner() {
    if !check_test_env() {
        return;
    }

    let db = TestDb::start().await.expect("Failed to connect");

    let err = PropertyService::new(&db.ctx)
        .add_property(property_in(UserId::new(i32::MAX), "Nowhere", 100))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::InvalidReference(_))));

    db.stop().await;
}

// ============================================================================
// Reservations
// ============================================================================

#[tokio::test]
async fn test_add_reservation_and_list() {
    if !check_test_env() {
        return;
    }

    let db = TestDb::start().await.expect("Failed to connect");
    let guest = UserService::new(&db.ctx).add_user(unique_user()).await.unwrap();
    let property = PropertyService::new(&db.ctx)
        .add_property(property_in(guest, "Tofino", 20_000))
        .await
        .unwrap();
    let reservations = ReservationService::new(&db.ctx);

    let later = reservations
        .add_reservation(NewReservation::new(
            date("2022-06-01"),
            date("2022-06-05"),
            property.id,
            guest,
        ))
        .await
        .unwrap();
    let first = reservations
        .add_reservation(NewReservation::new(
            date("2022-04-20"),
            date("2022-04-21"),
            property.id,
            guest,
        ))
        .await
        .unwrap();
    assert_eq!(first.start_date, date("2022-04-20"));
    assert_eq!(first.end_date, date("2022-04-21"));
    assert_ne!(first.id, later.id);

    let listed = reservations.get_all_reservations(guest, None).await.unwrap();
    let ids: Vec<_> = listed.iter().map(|l| l.reservation.id).collect();
    assert_eq!(ids, vec![first.id, later.id]);
    assert!(listed.iter().all(|l| l.property.id == property.id));

    let capped = reservations.get_all_reservations(guest, Some(1)).await.unwrap();
    assert_eq!(capped.len(), 1);

    db.stop().await;
}

#[tokio::test]
async fn test_reservation_rejections() {
    if !check_test_env() {
        return;
    }

    let db = TestDb::start().await.expect("Failed to connect");
    let guest = UserService::new(&db.ctx).add_user(unique_user()).await.unwrap();
    let reservations = ReservationService::new(&db.ctx);

    let err = reservations
        .add_reservation(NewReservation::new(
            date("2022-04-21"),
            date("2022-04-20"),
            PropertyId::new(1),
            guest,
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::InvalidDateRange { .. })));

    let err = reservations
        .add_reservation(NewReservation::new(
            date("2022-04-20"),
            date("2022-04-21"),
            PropertyId::new(i32::MAX),
            guest,
        ))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);

    db.stop().await;
}
