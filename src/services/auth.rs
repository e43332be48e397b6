//! Authentication service: registration, login, password hashing

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use validator::Validate;

use crate::{
    config::SessionConfig,
    error::{AppError, AppResult},
    models::user::{LoginForm, RegisterForm, Role, User},
    repository::Repository,
    session::SessionClaims,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: SessionConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: SessionConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new user, returning its id.
    ///
    /// Blank required fields fail validation; a taken username is a
    /// conflict. There is no email verification.
    pub async fn register(&self, mut form: RegisterForm) -> AppResult<i64> {
        form.name = form.name.trim().to_string();
        form.email = form.email.trim().to_string();
        form.username = form.username.trim().to_string();

        form.validate()
            .map_err(|_| AppError::Validation("Please fill all required fields.".to_string()))?;

        let role = match form.role.as_deref().map(str::trim) {
            None | Some("") => Role::Student,
            Some(s) => Role::parse(s)
                .ok_or_else(|| AppError::Validation("Unknown role.".to_string()))?,
        };

        if self.repository.users.username_exists(&form.username).await? {
            return Err(AppError::Conflict("Username already taken.".to_string()));
        }

        let password_hash = Self::hash_password(&form.password)?;

        self.repository
            .users
            .insert(&form.name, &form.email, &form.username, &password_hash, role)
            .await
    }

    /// Authenticate and mint a session token.
    ///
    /// An unknown username and a wrong password fail identically.
    pub async fn login(&self, form: LoginForm) -> AppResult<(String, User)> {
        form.validate()
            .map_err(|_| AppError::Authentication("Invalid credentials.".to_string()))?;

        let user = self
            .repository
            .users
            .get_by_username(form.username.trim())
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid credentials.".to_string()))?;

        if !Self::verify_password(&user.password_hash, &form.password) {
            return Err(AppError::Authentication("Invalid credentials.".to_string()));
        }

        let claims = SessionClaims::new(
            user.user_id,
            &user.username,
            &user.name,
            user.role,
            self.config.expiry_hours,
        );
        let token = claims
            .create_token(&self.config.secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        Ok((token, user))
    }

    /// Hash a password with a fresh random salt
    fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }

    /// Verify a password against a stored hash
    fn verify_password(hash: &str, password: &str) -> bool {
        PasswordHash::new(hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}
