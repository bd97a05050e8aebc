//! User service
//!
//! Lookups, registration and credential checks for marketplace users.

use lightbnb_common::AppError;
use lightbnb_core::entities::{NewUser, User};
use lightbnb_core::value_objects::UserId;
use tracing::{error, info, instrument, warn};
use validator::Validate;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a user by email, `None` when no account uses it
    #[instrument(skip(self))]
    pub async fn get_user_with_email(&self, email: &str) -> ServiceResult<Option<User>> {
        self.ctx.user_repo().find_by_email(email).await.map_err(|e| {
            error!(error = %e, "Failed to look up user by email");
            ServiceError::from(e)
        })
    }

    /// Get a user by ID, `None` when it does not exist
    #[instrument(skip(self))]
    pub async fn get_user_with_id(&self, user_id: UserId) -> ServiceResult<Option<User>> {
        self.ctx.user_repo().find_by_id(user_id).await.map_err(|e| {
            error!(error = %e, "Failed to look up user by id");
            ServiceError::from(e)
        })
    }

    /// Register a user and return the new id
    ///
    /// The password is hashed before it reaches the repository.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn add_user(&self, user: NewUser) -> ServiceResult<UserId> {
        user.validate().map_err(|e| {
            warn!(error = %e, "Rejected user registration");
            ServiceError::from(e)
        })?;

        let password_hash = self.ctx.password_service().hash(&user.password)?;

        let user_id = self
            .ctx
            .user_repo()
            .create(&user.name, &user.email, &password_hash)
            .await
            .map_err(|e| {
                if e.is_conflict() {
                    warn!("Registration failed: email already registered");
                } else {
                    error!(error = %e, "Failed to insert user");
                }
                ServiceError::from(e)
            })?;

        info!(user_id = %user_id, "User registered");
        Ok(user_id)
    }

    /// Check an email and password pair
    ///
    /// Unknown emails and wrong passwords fail the same way.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> ServiceResult<User> {
        let user = self.get_user_with_email(email).await?.ok_or_else(|| {
            warn!("Login failed: user not found");
            ServiceError::App(AppError::InvalidCredentials)
        })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        self.ctx
            .password_service()
            .verify_or_error(password, &password_hash)
            .map_err(|e| {
                warn!(user_id = %user.id, "Login failed: invalid password");
                ServiceError::from(e)
            })?;

        info!(user_id = %user.id, "User authenticated");
        Ok(user)
    }
}
