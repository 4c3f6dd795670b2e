//! Runtime settings read from the process environment.
//!
//! Every accessor falls back to a development-friendly default, so the
//! service starts with no configuration at all. Values are read on demand;
//! `.env` files are loaded by `main` before anything here is consulted.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `ENVIRONMENT` | `production` |
//! | `HOST` / `PORT` | `127.0.0.1` / `3000` |
//! | `STORAGE_BACKEND` | `mongodb` (`memory` for a throwaway store) |
//! | `MONGODB_URI` | `mongodb://localhost:27017` |
//! | `DATABASE_NAME` | `registro_usuarios` |
//! | `USERS_COLLECTION` | `usuarios` |
//! | `BCRYPT_COST` | per environment, accepted range 4-15 |
//! | `CORS_ALLOWED_ORIGINS` | `http://localhost:3000,http://127.0.0.1:3000` |

use std::env;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

pub struct PasswordConfig;

impl PasswordConfig {
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 15;

    /// bcrypt work factor: `BCRYPT_COST` when valid, else the environment default.
    pub fn bcrypt_cost() -> u32 {
        Self::bcrypt_cost_from(env::var("BCRYPT_COST").ok().as_deref(), &Environment::current())
    }

    pub fn bcrypt_cost_from(value: Option<&str>, env: &Environment) -> u32 {
        value
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|cost| (Self::MIN_COST..=Self::MAX_COST).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(env))
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 3000;

    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(Self::DEFAULT_PORT)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

pub struct DatabaseConfig;

impl DatabaseConfig {
    pub const APP_NAME: &'static str = "registro_usuarios";

    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "registro_usuarios".to_string())
    }

    pub fn users_collection() -> String {
        env::var("USERS_COLLECTION").unwrap_or_else(|_| "usuarios".to_string())
    }
}

/// Where registered users live.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorageBackend {
    MongoDb,
    /// Process-local, lost on restart
    Memory,
}

impl StorageBackend {
    pub fn current() -> Self {
        Self::from_str(&env::var("STORAGE_BACKEND").unwrap_or_default())
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" | "in-memory" => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::MongoDb => "mongodb",
            StorageBackend::Memory => "memory",
        }
    }
}

pub struct CorsConfig;

impl CorsConfig {
    pub const DEFAULT_ORIGINS: &'static str = "http://localhost:3000,http://127.0.0.1:3000";

    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| Self::DEFAULT_ORIGINS.to_string()),
        )
    }

    /// Comma-separated list; blanks are dropped.
    pub fn parse_origins(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
