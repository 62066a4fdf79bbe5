use std::path::PathBuf;
use std::time::Duration;

use crate::error::RelayError;

pub const DEFAULT_API_URL: &str = "https://graph.facebook.com/v18.0";
pub const DEFAULT_TEMPLATE_NAME: &str = "hello_world";
pub const DEFAULT_TEMPLATE_LANGUAGE: &str = "en";
pub const DEFAULT_COUNTRY_CODE: &str = "91";

/// Runtime settings read from the environment (or a `.env` file).
///
/// The three messaging credentials stay optional here so the page can
/// be served without them; the relay refuses to send until they are set.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub public_dir: PathBuf,
    pub api_url: String,
    pub phone_number_id: Option<String>,
    pub access_token: Option<String>,
    pub owner_number: Option<String>,
    pub template_name: String,
    pub template_language: String,
    pub country_code: String,
    pub timeout: Duration,
}

/// The subset of [`Config`] that must be present before any message goes out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub phone_number_id: String,
    pub access_token: String,
    pub owner_number: String,
}

fn var(name: &str) -> Option<String> {
    dotenvy::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Digits only, so `+91` and `91` both work; falls back to the default
/// when nothing is left.
fn country_code(raw: Option<&str>) -> String {
    let digits: String = raw
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        DEFAULT_COUNTRY_CODE.to_string()
    } else {
        digits
    }
}

fn timeout_secs(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.parse().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(10)
}

impl Config {
    pub fn from_env() -> Self {
        let port = var("LANDING_PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        let timeout_secs = timeout_secs(var("WHATSAPP_TIMEOUT_SECS").as_deref());

        Self {
            port,
            public_dir: var("LANDING_PUBLIC_DIR")
                .unwrap_or_else(|| "public".to_string())
                .into(),
            api_url: var("WHATSAPP_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            phone_number_id: var("WHATSAPP_PHONE_NUMBER_ID"),
            access_token: var("WHATSAPP_ACCESS_TOKEN"),
            owner_number: var("OWNER_WHATSAPP_NUMBER"),
            template_name: var("WHATSAPP_TEMPLATE_NAME")
                .unwrap_or_else(|| DEFAULT_TEMPLATE_NAME.to_string()),
            template_language: var("WHATSAPP_TEMPLATE_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_TEMPLATE_LANGUAGE.to_string()),
            country_code: country_code(var("DEFAULT_COUNTRY_CODE").as_deref()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn credentials(&self) -> Result<Credentials, RelayError> {
        let phone_number_id = self
            .phone_number_id
            .clone()
            .ok_or(RelayError::Configuration("WhatsApp credentials not configured"))?;
        let access_token = self
            .access_token
            .clone()
            .ok_or(RelayError::Configuration("WhatsApp credentials not configured"))?;
        let owner_number = self
            .owner_number
            .clone()
            .ok_or(RelayError::Configuration("Owner WhatsApp number not configured"))?;

        Ok(Credentials {
            phone_number_id,
            access_token,
            owner_number,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            public_dir: PathBuf::from("public"),
            api_url: DEFAULT_API_URL.to_string(),
            phone_number_id: None,
            access_token: None,
            owner_number: None,
            template_name: DEFAULT_TEMPLATE_NAME.to_string(),
            template_language: DEFAULT_TEMPLATE_LANGUAGE.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}
