use anyhow::Context;
use std::env;
use std::path::PathBuf;

/// Process configuration, read once at startup.
///
/// The signing secret and the operator API key are required; the rest
/// defaults.
pub struct Config {
    pub port: u16,
    pub db_path: PathBuf,
    pub public_dir: PathBuf,
    pub jwt_secret: String,
    pub api_key: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        let api_key = env::var("API_KEY").context("API_KEY must be set")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a number")?,
            Err(_) => 8080,
        };
        let db_path = env::var("DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("db.json"));
        let public_dir = env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        Ok(Self {
            port,
            db_path,
            public_dir,
            jwt_secret,
            api_key,
        })
    }
}
