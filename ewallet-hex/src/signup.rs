//! User registration service.

use validator::Validate;

use ewallet_types::{
    AppError, PasswordHasher, RoleResolver, SignupRequest, UserRepository, UserResponse,
};

use crate::mapper::{SignupRequestMapper, normalize_identifier};

/// Registers users: validate → reject duplicates → map → persist.
pub struct SignupService<U: UserRepository, H: PasswordHasher, R: RoleResolver> {
    users: U,
    mapper: SignupRequestMapper<H, R>,
}

impl<U: UserRepository, H: PasswordHasher, R: RoleResolver> SignupService<U, H, R> {
    pub fn new(users: U, mapper: SignupRequestMapper<H, R>) -> Self {
        Self { users, mapper }
    }

    pub fn users(&self) -> &U {
        &self.users
    }

    pub fn mapper(&self) -> &SignupRequestMapper<H, R> {
        &self.mapper
    }

    /// Registers a new user.
    ///
    /// # Errors
    /// - `BadRequest` if the request fails validation
    /// - `Conflict` if the normalized username or email is already registered
    /// - `InvalidRoleType` if a requested role name is unknown
    #[tracing::instrument(skip(self, req), fields(username = %req.username))]
    pub async fn signup(&self, req: SignupRequest) -> Result<UserResponse, AppError> {
        req.validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        if self
            .users
            .exists_by_username(&normalize_identifier(&req.username))
            .await?
        {
            tracing::info!("signup rejected, username taken");
            return Err(AppError::Conflict("Username already exists".into()));
        }

        if self
            .users
            .exists_by_email(&normalize_identifier(&req.email))
            .await?
        {
            tracing::info!("signup rejected, email taken");
            return Err(AppError::Conflict("Email already exists".into()));
        }

        let user = self.mapper.to_entity(&req).await?;
        let saved = self.users.save(user).await?;

        tracing::info!(user_id = ?saved.id, roles = saved.roles.len(), "user registered");

        UserResponse::from_persisted(saved)
            .ok_or_else(|| AppError::Internal("Stored user has no id".into()))
    }
}
