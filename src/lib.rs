pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod routes;
pub mod services;
pub mod source;
pub mod utils;

pub use app::AppState;
pub use config::AppConfig;
pub use error::{AppError, Result};
