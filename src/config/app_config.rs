use crate::error::{AppError, Result};
use std::env;

use super::ServiceAccountKey;

pub const DEFAULT_SPREADSHEET_ID: &str = "12oIcVvDcdH6IO8fBOfUbU_stIDJLQwMk6oKs5eDThdU";
pub const DEFAULT_WORKSHEET: &str = "Products";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub sheets: SheetsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub credentials: ServiceAccountKey,
    pub spreadsheet_id: String,
    pub worksheet: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid PORT value".to_string()))?,
            },
            sheets: SheetsConfig {
                credentials: ServiceAccountKey::from_json(
                    &env::var("GOOGLE_CLOUD_API_KEY").map_err(|_| {
                        AppError::ConfigError("GOOGLE_CLOUD_API_KEY not set".to_string())
                    })?,
                )?,
                spreadsheet_id: non_empty_var("SPREADSHEET_ID", DEFAULT_SPREADSHEET_ID),
                worksheet: non_empty_var("WORKSHEET_NAME", DEFAULT_WORKSHEET),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn non_empty_var(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
