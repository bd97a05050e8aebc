//! # lightbnb-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations, including the property search builder
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lightbnb_db::pool::{create_pool, PoolConfig};
//! use lightbnb_db::repositories::PgUserRepository;
//! use lightbnb_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::local()).await?;
//!     let users = PgUserRepository::new(pool);
//!
//!     let user = users.find_by_email("tristanjacobs@gmail.com").await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, ping, PgPool, PoolConfig};
pub use repositories::{PgPropertyRepository, PgReservationRepository, PgUserRepository};
