mod sheets_service;

pub use sheets_service::SheetsClient;
