//! # lightbnb-service
//!
//! Application layer exposing the marketplace's data access operations.
//!
//! ```ignore
//! let config = AppConfig::from_env()?;
//! let ctx = ServiceContext::connect(&config).await?;
//!
//! let listings = PropertyService::new(&ctx)
//!     .get_all_properties(PropertyFilter::new().city("Vancouver"), None)
//!     .await?;
//!
//! ctx.close().await;
//! ```

pub mod services;

pub use services::{
    PropertyService, ReservationService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UserService,
};
