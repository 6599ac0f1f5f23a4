use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use sea_orm::DatabaseConnection;

use crate::{
    data::admin::AdminRepository,
    error::{auth::AuthError, Error},
    model::auth::{AdminClaims, LoginDto, TokenDto},
};

/// Bearer token lifetime for admin sessions.
const TOKEN_TTL_HOURS: i64 = 12;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt_secret: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt_secret: &'a str) -> Self {
        Self { db, jwt_secret }
    }

    /// Verifies admin credentials and issues a signed bearer token.
    ///
    /// Credential failures are indistinguishable to the caller: an unknown
    /// username and a wrong password both return
    /// [`AuthError::InvalidCredentials`].
    pub async fn login(&self, dto: &LoginDto) -> Result<TokenDto, Error> {
        let admin_repo = AdminRepository::new(self.db);

        let admin = admin_repo
            .get_by_username(&dto.username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let parsed_hash =
            PasswordHash::new(&admin.password_hash).map_err(|_| AuthError::InvalidCredentials)?;

        Argon2::default()
            .verify_password(dto.password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        let claims = AdminClaims {
            sub: admin.id,
            username: admin.username,
            exp: (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|_| AuthError::InvalidToken)?;

        Ok(TokenDto { token })
    }
}

/// Decodes and validates a bearer token into admin claims.
pub fn decode_token(token: &str, jwt_secret: &str) -> Result<AdminClaims, AuthError> {
    jsonwebtoken::decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)
}

/// Hashes an admin password for storage; used when seeding admin accounts.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut argon2::password_hash::rand_core::OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::InvalidCredentials)
}
