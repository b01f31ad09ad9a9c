//! Runtime configuration, read from the process environment (and `.env`).
//!
//! Recognised keys: `DATABASE_URL`, `LOGLEVEL`, `LISTEN_ADDR`.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub loglevel: String,
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:firstproject.db".to_string(),
            loglevel: "info".to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::raw().only(&[
            "DATABASE_URL",
            "LOGLEVEL",
            "LISTEN_ADDR",
        ]))
    }

    pub fn load() -> Result<Self, AppError> {
        Ok(Self::figment().extract()?)
    }
}
