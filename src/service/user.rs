use bcrypt::{DEFAULT_COST, hash, verify};

use crate::database::models::user::{NewUser, UserEntity};
use crate::database::operations::UserOperation;
use crate::error::AppError;

/// User registration and credential checks. Token issuance lives in the
/// external auth layer; this is the narrow surface it consumes.
pub struct UserService {
    users: UserOperation,
}

impl UserService {
    pub fn new(users: UserOperation) -> Self {
        Self { users }
    }

    /// Registers a user. A duplicate username surfaces as `Conflict`.
    pub async fn create(&self, input: NewUser) -> Result<i32, AppError> {
        let password_hash = hash(input.password.as_bytes(), DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("failed to hash password: {}", e)))?;

        let id = self
            .users
            .create(&input.name, &input.username, &password_hash)
            .await?;
        Ok(id)
    }

    /// Unknown username and wrong password are indistinguishable to the
    /// caller.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserEntity, AppError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AppError::NotFound)?;

        let ok = verify(password.as_bytes(), &user.password_hash)
            .map_err(|e| AppError::Internal(format!("failed to verify password: {}", e)))?;
        if !ok {
            return Err(AppError::NotFound);
        }

        Ok(user)
    }
}
