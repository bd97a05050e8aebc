//! In-memory repository doubles for service tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use lightbnb_core::entities::{
    NewProperty, NewReservation, Property, PropertyListing, Reservation, ReservationListing, User,
};
use lightbnb_core::error::DomainError;
use lightbnb_core::traits::{
    PropertyFilter, PropertyRepository, RepoResult, ReservationRepository, UserRepository,
};
use lightbnb_core::value_objects::{Cents, PropertyId, ReservationId, UserId};

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct Tables {
    users: Vec<(User, String)>,
    properties: Vec<PropertyListing>,
    reservations: Vec<Reservation>,
}

/// Shared tables behind every repository double
#[derive(Clone, Default)]
pub struct MemoryDb {
    tables: Arc<Mutex<Tables>>,
    failing: Arc<Mutex<bool>>,
}

impl MemoryDb {
    /// Make every subsequent repository call fail like a lost connection
    pub fn fail_all(&self) {
        *self.failing.lock().unwrap() = true;
    }

    fn check(&self) -> RepoResult<()> {
        if *self.failing.lock().unwrap() {
            Err(DomainError::DatabaseError("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    /// Seed a property with a precomputed average rating
    pub fn seed_property(&self, property: &NewProperty, average_rating: Option<f64>) -> PropertyId {
        let mut tables = self.tables.lock().unwrap();
        let id = PropertyId::new(next_id(tables.properties.len()));
        tables.properties.push(PropertyListing {
            property: stored_property(id, property),
            average_rating,
        });
        id
    }

    pub fn password_hash_of(&self, email: &str) -> Option<String> {
        let tables = self.tables.lock().unwrap();
        tables
            .users
            .iter()
            .find(|(user, _)| user.email == email)
            .map(|(_, hash)| hash.clone())
    }
}

fn next_id(len: usize) -> i32 {
    i32::try_from(len).unwrap() + 1
}

fn stored_property(id: PropertyId, p: &NewProperty) -> Property {
    Property {
        id,
        owner_id: p.owner_id,
        title: p.title.clone(),
        description: p.description.clone(),
        thumbnail_photo_url: p.thumbnail_photo_url.clone(),
        cover_photo_url: p.cover_photo_url.clone(),
        cost_per_night: p.cost_per_night,
        street: p.street.clone(),
        city: p.city.clone(),
        province: p.province.clone(),
        post_code: p.post_code.clone(),
        country: p.country.clone(),
        parking_spaces: p.parking_spaces,
        number_of_bathrooms: p.number_of_bathrooms,
        number_of_bedrooms: p.number_of_bedrooms,
    }
}

#[async_trait]
impl UserRepository for MemoryDb {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn create(&self, name: &str, email: &str, password_hash: &str) -> RepoResult<UserId> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|(u, _)| u.email == email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        let id = UserId::new(next_id(tables.users.len()));
        tables.users.push((
            User::new(id, name.to_string(), email.to_string()),
            password_hash.to_string(),
        ));
        Ok(id)
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|(u, _)| u.id == id).map(|(_, h)| h.clone()))
    }
}

#[async_trait]
impl PropertyRepository for MemoryDb {
    async fn find_all(&self, filter: &PropertyFilter, limit: i64) -> RepoResult<Vec<PropertyListing>> {
        self.check()?;
        filter.validate()?;
        let (min, max) = filter.price_bounds()?;
        let tables = self.tables.lock().unwrap();

        let mut found: Vec<PropertyListing> = tables
            .properties
            .iter()
            .filter(|l| filter.city_pattern().map_or(true, |c| l.property.city.contains(c)))
            .filter(|l| filter.owner_id.map_or(true, |o| l.property.owner_id == o))
            .filter(|l| min.map_or(true, |m| l.property.cost_per_night >= m))
            .filter(|l| max.map_or(true, |m| l.property.cost_per_night <= m))
            .filter(|l| {
                filter
                    .minimum_rating
                    .map_or(true, |r| l.average_rating.is_some_and(|avg| avg >= r))
            })
            .cloned()
            .collect();

        found.sort_by_key(|l| l.property.cost_per_night);
        found.truncate(usize::try_from(limit).unwrap());
        Ok(found)
    }

    async fn find_by_id(&self, id: PropertyId) -> RepoResult<Option<PropertyListing>> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.properties.iter().find(|l| l.property.id == id).cloned())
    }

    async fn create(&self, property: &NewProperty) -> RepoResult<Property> {
        self.check()?;
        let owner_known = {
            let tables = self.tables.lock().unwrap();
            tables.users.iter().any(|(u, _)| u.id == property.owner_id)
        };
        if !owner_known {
            return Err(DomainError::InvalidReference("properties_owner_id_fkey".to_string()));
        }
        let id = self.seed_property(property, None);
        Ok(stored_property(id, property))
    }
}

#[async_trait]
impl ReservationRepository for MemoryDb {
    async fn find_by_guest(&self, guest_id: UserId, limit: i64) -> RepoResult<Vec<ReservationListing>> {
        self.check()?;
        let tables = self.tables.lock().unwrap();

        let mut found: Vec<ReservationListing> = tables
            .reservations
            .iter()
            .filter(|r| r.guest_id == guest_id)
            .filter_map(|r| {
                tables
                    .properties
                    .iter()
                    .find(|l| l.property.id == r.property_id)
                    .map(|l| ReservationListing {
                        reservation: r.clone(),
                        property: l.property.clone(),
                        average_rating: l.average_rating,
                    })
            })
            .collect();

        found.sort_by_key(|l| (l.reservation.start_date, l.reservation.id));
        found.truncate(usize::try_from(limit).unwrap());
        Ok(found)
    }

    async fn create(&self, reservation: &NewReservation) -> RepoResult<Reservation> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        if !tables.users.iter().any(|(u, _)| u.id == reservation.guest_id) {
            return Err(DomainError::InvalidReference("reservations_guest_id_fkey".to_string()));
        }
        let stored = Reservation {
            id: ReservationId::new(next_id(tables.reservations.len())),
            start_date: reservation.start_date,
            end_date: reservation.end_date,
            property_id: reservation.property_id,
            guest_id: reservation.guest_id,
        };
        tables.reservations.push(stored.clone());
        Ok(stored)
    }
}

/// Context backed by a fresh in-memory database
pub fn memory_context() -> ServiceContext {
    memory_context_with(&MemoryDb::default())
}

pub fn memory_context_with(db: &MemoryDb) -> ServiceContext {
    ServiceContextBuilder::new()
        .user_repo(Arc::new(db.clone()))
        .property_repo(Arc::new(db.clone()))
        .reservation_repo(Arc::new(db.clone()))
        .build()
        .unwrap()
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn new_property(owner_id: UserId, city: &str, cost_per_night: i64) -> NewProperty {
    NewProperty {
        owner_id,
        title: format!("Stay in {city}"),
        description: "description".to_string(),
        thumbnail_photo_url: "https://images.example.com/thumb.jpg".to_string(),
        cover_photo_url: "https://images.example.com/cover.jpg".to_string(),
        cost_per_night: Cents::new(cost_per_night),
        street: "651 Nami Road".to_string(),
        city: city.to_string(),
        province: "Ontario".to_string(),
        post_code: "51618".to_string(),
        country: "Canada".to_string(),
        parking_spaces: 1,
        number_of_bathrooms: 1,
        number_of_bedrooms: 2,
    }
}
