use std::sync::Arc;
use crate::domain::{
    models::{auth::{Claims, RefreshTokenRecord}, user::User},
    ports::AuthRepository
};
use crate::error::AppError;
use crate::config::Config;
use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2, PasswordHash, PasswordVerifier};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use chrono::{Utc, Duration};
use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};
use sha2::{Sha256, Digest};
use tracing::error;

pub const TOKEN_AUDIENCE: &str = "carta-dashboard";
pub const ACCESS_COOKIE: &str = "access_token";
pub const REFRESH_COOKIE: &str = "refresh_token";

pub const ACCESS_TTL_MINUTES: i64 = 15;
pub const REFRESH_TTL_DAYS: i64 = 7;

/// Everything a fresh session hands back to the client: the signed
/// access JWT and CSRF value, plus the raw refresh token (stored only
/// as a fingerprint, so this is the one time it exists in the clear).
pub struct SessionTokens {
    pub access_jwt: String,
    pub refresh_token: String,
    pub csrf_token: String,
}

pub struct AuthService {
    repo: Arc<dyn AuthRepository>,
    config: Config,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthService {
    pub fn new(repo: Arc<dyn AuthRepository>, config: Config) -> Self {
        let encoding_key = EncodingKey::from_ed_pem(config.jwt_secret_key.as_bytes())
            .expect("JWT_SECRET_KEY is not a valid Ed25519 PEM");
        let decoding_key = DecodingKey::from_ed_pem(config.jwt_public_key.as_bytes())
            .expect("JWT_PUBLIC_KEY is not a valid Ed25519 PEM");

        Self { repo, config, encoding_key, decoding_key }
    }

    /// Issues a full token set for a verified user and persists the
    /// refresh fingerprint.
    pub async fn start_session(&self, user: &User) -> Result<SessionTokens, AppError> {
        let csrf_token = random_token(32);
        let access_jwt = self.sign_access_token(user, &csrf_token)?;

        let refresh_token = random_token(64);
        let now = Utc::now();
        let record = RefreshTokenRecord {
            token_hash: token_fingerprint(&refresh_token),
            user_id: user.id.clone(),
            restaurant_id: user.restaurant_id.clone(),
            expires_at: now + Duration::days(REFRESH_TTL_DAYS),
            created_at: now,
        };
        self.repo.create_refresh_token(&record).await?;

        Ok(SessionTokens { access_jwt, refresh_token, csrf_token })
    }

    /// Looks up and deletes the presented refresh token in one motion.
    /// The record is consumed even when it turns out to be expired, so
    /// a stolen token is usable at most once.
    pub async fn consume_refresh_token(&self, presented: &str) -> Result<RefreshTokenRecord, AppError> {
        let fingerprint = token_fingerprint(presented);

        let record = self.repo.find_refresh_token(&fingerprint).await?
            .ok_or(AppError::Unauthorized)?;
        self.repo.delete_refresh_token(&fingerprint).await?;

        if record.expires_at < Utc::now() {
            return Err(AppError::Unauthorized);
        }
        Ok(record)
    }

    pub async fn revoke_refresh_token(&self, presented: &str) -> Result<(), AppError> {
        self.repo.delete_refresh_token(&token_fingerprint(presented)).await
    }

    pub fn verify_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::EdDSA);
        validation.set_audience(&[TOKEN_AUDIENCE]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized)
    }

    fn sign_access_token(&self, user: &User, csrf: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            iss: self.config.auth_issuer.clone(),
            sub: user.id.clone(),
            aud: TOKEN_AUDIENCE.to_string(),
            exp: (now + Duration::minutes(ACCESS_TTL_MINUTES)).timestamp() as usize,
            iat: now.timestamp() as usize,
            jti: Uuid::new_v4().to_string(),
            restaurant_id: user.restaurant_id.clone(),
            role: user.role.clone(),
            csrf_token: csrf.to_string(),
        };

        encode(&Header::new(Algorithm::EdDSA), &claims, &self.encoding_key).map_err(|e| {
            error!("access token signing failed: {}", e);
            AppError::Internal
        })
    }
}

pub fn hash_password(plain: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string())
}

pub fn verify_password(candidate: &str, stored_hash: &str) -> Result<(), AppError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|_| AppError::Internal)?;
    Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .map_err(|_| AppError::Unauthorized)
}

pub fn random_token(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn token_fingerprint(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
