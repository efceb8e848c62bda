//! User service for signup, credential checks and token issuance
//!
//! Password hashing and verification run on the blocking thread pool;
//! token signing uses the pre-computed keys held by `JwtService`.

use crate::auth::{JwtService, PasswordService};
use crate::error::{ApiError, StoreError};
use crate::repositories::{UserRecord, UserRepository};
use ru_active_shared::types::{AccountSummary, AuthTokens};
use ru_active_shared::validation::{get_field_display_label, validate_password, validate_username};
use sqlx::SqlitePool;
use tracing::{info, warn};

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Create an account and return a fresh token pair
    pub async fn register(
        pool: &SqlitePool,
        jwt_service: &JwtService,
        username: &str,
        password: &str,
    ) -> Result<AuthTokens, ApiError> {
        validate_username(username).map_err(|msg| field_error("username", msg))?;
        validate_password(password).map_err(|msg| field_error("password", msg))?;

        let user = Self::add_user(pool, username, password).await?;
        Self::issue_tokens(jwt_service, user.id, &user.username)
    }

    /// Hash the password and store the user with its credential.
    ///
    /// Format rules are the caller's concern; this only guarantees
    /// uniqueness and that no plaintext reaches storage.
    pub async fn add_user(
        pool: &SqlitePool,
        username: &str,
        password: &str,
    ) -> Result<UserRecord, ApiError> {
        if UserRepository::username_exists(pool, username).await? {
            return Err(StoreError::DuplicateUsername(username.to_string()).into());
        }

        let password_hash = PasswordService::hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, username, &password_hash).await?;

        metrics::counter!("ru_active_signups_total").increment(1);
        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// True when a credential exists for `username` and `password` matches it
    pub async fn verify_user(
        pool: &SqlitePool,
        username: &str,
        password: &str,
    ) -> Result<bool, ApiError> {
        let Some(stored_hash) = UserRepository::password_hash(pool, username).await? else {
            return Ok(false);
        };

        PasswordService::verify_async(password.to_string(), stored_hash)
            .await
            .map_err(ApiError::Internal)
    }

    /// Login with username and password
    pub async fn login(
        pool: &SqlitePool,
        jwt_service: &JwtService,
        username: &str,
        password: &str,
    ) -> Result<AuthTokens, ApiError> {
        if !Self::verify_user(pool, username, password).await? {
            metrics::counter!("ru_active_logins_total", "outcome" => "rejected").increment(1);
            warn!("Rejected login attempt");
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        let user = UserRepository::find_by_username(pool, username)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

        metrics::counter!("ru_active_logins_total", "outcome" => "success").increment(1);
        Self::issue_tokens(jwt_service, user.id, &user.username)
    }

    /// Exchange a refresh token for a new token pair
    pub async fn refresh_token(
        pool: &SqlitePool,
        jwt_service: &JwtService,
        refresh_token: &str,
    ) -> Result<AuthTokens, ApiError> {
        let claims = jwt_service
            .validate_refresh_token(refresh_token)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid refresh token: {}", e)))?;

        let user_id = claims
            .user_id()
            .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

        // The account must still exist
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

        Self::issue_tokens(jwt_service, user.id, &user.username)
    }

    /// Account summary for the authenticated user
    pub async fn account(pool: &SqlitePool, user_id: i64) -> Result<AccountSummary, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(AccountSummary {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        })
    }

    fn issue_tokens(
        jwt_service: &JwtService,
        user_id: i64,
        username: &str,
    ) -> Result<AuthTokens, ApiError> {
        let access_token = jwt_service
            .generate_access_token(user_id, username)
            .map_err(ApiError::Internal)?;
        let refresh_token = jwt_service
            .generate_refresh_token(user_id, username)
            .map_err(ApiError::Internal)?;

        Ok(AuthTokens {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: jwt_service.access_token_expiry_secs(),
        })
    }
}

fn field_error(field: &str, msg: String) -> ApiError {
    ApiError::Validation(format!("{}: {}", get_field_display_label(field), msg))
}
