mod app_config;
mod service_account;

pub use app_config::{
    AppConfig, DEFAULT_SPREADSHEET_ID, DEFAULT_WORKSHEET, ServerConfig, SheetsConfig,
};
pub use service_account::*;
