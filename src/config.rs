use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Ed25519 signing key, PEM.
    pub jwt_secret_key: String,
    /// Matching verification key, PEM.
    pub jwt_public_key: String,
    pub auth_issuer: String,
}

fn required(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("{name} must be set"))
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: required("DATABASE_URL"),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".into())
                .parse()
                .expect("PORT must be a number"),
            jwt_secret_key: required("JWT_SECRET_KEY"),
            jwt_public_key: required("JWT_PUBLIC_KEY"),
            auth_issuer: env::var("AUTH_ISSUER")
                .unwrap_or_else(|_| "https://api.carta.local".into()),
        }
    }
}
