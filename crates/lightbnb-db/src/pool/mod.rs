//! Database connection pool

mod postgres;

pub use postgres::{create_pool, ping, PoolConfig, LOCAL_DATABASE_URL};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
