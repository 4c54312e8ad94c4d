use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::{
    config::{ServiceAccountKey, SheetsConfig},
    error::{AppError, Result},
    models::{records_from_values, SheetRow},
    source::RowSource,
    utils::jwt,
};

const SHEETS_API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

/// Authenticated handle to one worksheet. Built once at startup.
#[derive(Clone)]
pub struct SheetsClient {
    http: Client,
    access_token: String,
    spreadsheet_id: String,
    worksheet: String,
}

impl SheetsClient {
    pub async fn authorize(config: &SheetsConfig) -> Result<Self> {
        let http = Client::new();
        let access_token = exchange_token(&http, &config.credentials).await?;

        tracing::info!(
            "Authorized Google Sheets access as {}",
            config.credentials.client_email
        );

        Ok(Self {
            http,
            access_token,
            spreadsheet_id: config.spreadsheet_id.clone(),
            worksheet: config.worksheet.clone(),
        })
    }

    /// Checks that the spreadsheet exists and the token can read it.
    pub async fn open(&self) -> Result<()> {
        let url = self.spreadsheet_url(&[])?;

        self.http
            .get(url)
            .query(&[("fields", "spreadsheetId")])
            .bearer_auth(&self.access_token)
            .send()
            .await?
            .error_for_status()?;

        tracing::info!("Opened spreadsheet {}", self.spreadsheet_id);

        Ok(())
    }

    fn spreadsheet_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(SHEETS_API_URL)
            .map_err(|e| AppError::InternalError(format!("Invalid Sheets API URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| AppError::InternalError("Sheets API URL cannot be a base".to_string()))?
            .push(&self.spreadsheet_id)
            .extend(segments);

        Ok(url)
    }
}

#[async_trait]
impl RowSource for SheetsClient {
    async fn fetch_rows(&self) -> Result<Vec<SheetRow>> {
        let url = self.spreadsheet_url(&["values", self.worksheet.as_str()])?;

        let range: ValueRange = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let rows = records_from_values(range.values)?;
        tracing::debug!("Fetched {} rows from {}", rows.len(), self.worksheet);

        Ok(rows)
    }
}

async fn exchange_token(http: &Client, key: &ServiceAccountKey) -> Result<String> {
    let assertion = jwt::generate_assertion(key)?;

    let response = http
        .post(&key.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::AuthError(format!(
            "Token exchange rejected ({}): {}",
            status, body
        )));
    }

    let token: TokenResponse = response.json().await?;

    Ok(token.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(worksheet: &str) -> SheetsClient {
        SheetsClient {
            http: Client::new(),
            access_token: "token".to_string(),
            spreadsheet_id: "sheet-id".to_string(),
            worksheet: worksheet.to_string(),
        }
    }

    #[test]
    fn worksheet_name_is_percent_encoded_in_range_url() {
        let url = client("Spring Products")
            .spreadsheet_url(&["values", "Spring Products"])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-id/values/Spring%20Products"
        );
    }

    #[test]
    fn value_range_without_values_is_empty() {
        let range: ValueRange =
            serde_json::from_str(r#"{"range":"Products!A1:Z1000","majorDimension":"ROWS"}"#)
                .unwrap();

        assert!(range.values.is_empty());
    }
}
