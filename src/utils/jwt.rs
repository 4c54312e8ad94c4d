use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::{
    config::ServiceAccountKey,
    error::{AppError, Result},
};

pub const SHEETS_SCOPES: &[&str] = &[
    "https://spreadsheets.google.com/feeds",
    "https://www.googleapis.com/auth/drive",
];

const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn for_service_account(key: &ServiceAccountKey, issued_at: i64) -> Self {
        Self {
            iss: key.client_email.clone(),
            scope: SHEETS_SCOPES.join(" "),
            aud: key.token_uri.clone(),
            iat: issued_at,
            exp: issued_at + ASSERTION_LIFETIME_SECS,
        }
    }
}

pub fn generate_assertion(key: &ServiceAccountKey) -> Result<String> {
    let claims = Claims::for_service_account(key, chrono::Utc::now().timestamp());

    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .map_err(|e| AppError::AuthError(format!("Invalid service account private key: {}", e)))?;

    encode(&header, &claims, &encoding_key)
        .map_err(|e| AppError::AuthError(format!("Assertion signing failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ServiceAccountKey {
        ServiceAccountKey::from_json(
            r#"{"client_email":"shop@project.iam.gserviceaccount.com","private_key":"not a pem","token_uri":"https://oauth2.example/token"}"#,
        )
        .unwrap()
    }

    #[test]
    fn claims_cover_sheets_scopes_for_one_hour() {
        let claims = Claims::for_service_account(&key(), 1_000);

        assert_eq!(claims.iss, "shop@project.iam.gserviceaccount.com");
        assert_eq!(claims.aud, "https://oauth2.example/token");
        assert_eq!(
            claims.scope,
            "https://spreadsheets.google.com/feeds https://www.googleapis.com/auth/drive"
        );
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn invalid_private_key_is_an_auth_error() {
        let err = generate_assertion(&key()).unwrap_err();

        assert!(matches!(err, AppError::AuthError(_)));
    }
}
