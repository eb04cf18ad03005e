//! Authentication service implementation
//!
//! This service handles account registration, login, and bearer-token
//! issuance/verification. Accounts start unvalidated and cannot log in
//! until an admin validates them.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::settings::Settings;
use crate::database::repositories::UserRepository;
use crate::models::user::{CreateUserRequest, User, UserRole};
use crate::utils::errors::{Result, WanderplanError};

/// Claims carried in the bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub role: UserRole,
    pub exp: u64,
    pub iat: u64,
}

/// Authenticated caller identity, decoded from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub role: UserRole,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[derive(Clone)]
pub struct AuthService {
    user_repository: UserRepository,
    settings: Settings,
}

impl AuthService {
    pub fn new(user_repository: UserRepository, settings: Settings) -> Self {
        Self {
            user_repository,
            settings,
        }
    }

    /// Register a new account. The account is created unvalidated; the
    /// caller is told to wait for admin validation.
    pub async fn register(&self, request: CreateUserRequest) -> Result<User> {
        debug!(email = %request.email, "Registering new account");

        let (name, email) = validate_registration(&request)?;

        if self.user_repository.find_by_email(&email).await?.is_some() {
            warn!(email = %email, "Registration with taken email");
            return Err(WanderplanError::EmailTaken(email));
        }

        let password_hash = hash_password(&request.password)?;
        let user = self.user_repository.create(&name, &email, &password_hash).await?;

        info!(user_id = user.id, "New account registered, pending validation");
        Ok(user)
    }

    /// Log a user in and issue a bearer token. Unvalidated accounts are
    /// refused with a distinct error so the client can explain why.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String)> {
        debug!(email = %email, "Login attempt");

        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(WanderplanError::InvalidCredentials)?;

        verify_password(password, &user.password_hash)?;

        if !user.validated {
            warn!(user_id = user.id, "Login refused for unvalidated account");
            return Err(WanderplanError::AccountNotValidated);
        }

        let token = self.issue_token(&user)?;
        info!(user_id = user.id, "User logged in");
        Ok((user, token))
    }

    /// Issue a signed bearer token for a user
    pub fn issue_token(&self, user: &User) -> Result<String> {
        let now = Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: user.id,
            role: user.role,
            exp: now + self.settings.auth.token_ttl_seconds,
            iat: now,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.settings.auth.jwt_secret.as_bytes()),
        )
        .map_err(|e| WanderplanError::Authentication(e.to_string()))
    }

    /// Verify a bearer token and return the caller identity
    pub fn verify_token(&self, token: &str) -> Result<AuthUser> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.settings.auth.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| WanderplanError::Authentication(e.to_string()))?;

        Ok(AuthUser {
            id: data.claims.sub,
            role: data.claims.role,
        })
    }
}

/// Check registration fields and return the trimmed (name, email).
/// The uniqueness lookup and the insert both use the trimmed email, so
/// stray whitespace cannot sidestep the taken-email check.
fn validate_registration(request: &CreateUserRequest) -> Result<(String, String)> {
    let name = request.name.trim();
    let email = request.email.trim();

    if name.is_empty() {
        return Err(WanderplanError::InvalidInput("Name is required".to_string()));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(WanderplanError::InvalidInput("A valid email is required".to_string()));
    }
    if request.password.len() < 8 {
        return Err(WanderplanError::InvalidInput(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    Ok((name.to_string(), email.to_string()))
}

/// Hash a password with argon2id and a fresh salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| WanderplanError::Authentication(e.to_string()))
}

/// Verify a password against a stored argon2 hash
pub fn verify_password(password: &str, stored_hash: &str) -> Result<()> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| WanderplanError::Authentication(e.to_string()))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| WanderplanError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_registration_trims_name_and_email() {
        let (name, email) =
            validate_registration(&request("  Alice  ", " alice@example.com ", "long enough")).unwrap();
        assert_eq!(name, "Alice");
        assert_eq!(email, "alice@example.com");
    }

    #[test]
    fn test_registration_rejects_bad_fields() {
        assert!(validate_registration(&request("   ", "a@example.com", "long enough")).is_err());
        assert!(validate_registration(&request("Alice", "not-an-email", "long enough")).is_err());
        assert!(validate_registration(&request("Alice", "a@example.com", "short")).is_err());
    }

    #[test]
    fn test_password_round_trip() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("correct horse battery", &hash).is_ok());
        assert!(verify_password("wrong password", &hash).is_err());
    }
}
