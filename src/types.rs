use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::relay::{DeliveryStatus, Outcome};

/// Consultation form body as posted by the landing page.
///
/// Every field is optional on the wire so a missing one can be reported as
/// a validation error rather than a deserialization failure.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub property_type: Option<String>,
    pub location: Option<String>,
    pub wants_updates: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "1 BHK")]
    OneBhk,
    #[serde(rename = "2 BHK")]
    TwoBhk,
    #[serde(rename = "3 BHK")]
    ThreeBhk,
    #[serde(rename = "4+ BHK / Duplex")]
    FourPlusOrDuplex,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        Self::OneBhk,
        Self::TwoBhk,
        Self::ThreeBhk,
        Self::FourPlusOrDuplex,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::OneBhk => "1 BHK",
            Self::TwoBhk => "2 BHK",
            Self::ThreeBhk => "3 BHK",
            Self::FourPlusOrDuplex => "4+ BHK / Duplex",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn compact(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for PropertyType {
    type Err = String;

    /// Case and whitespace are ignored, so `4+ bhk/duplex` matches too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = compact(s);
        Self::ALL
            .into_iter()
            .find(|t| compact(t.label()) == wanted)
            .ok_or_else(|| format!("Unknown property type: {}", s.trim()))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResponse {
    pub success: bool,
    pub submission_id: Uuid,
    pub message: String,
    pub outcome: Outcome,
    pub client_message_sent: bool,
    pub owner_notified: bool,
    pub client_message: DeliveryStatus,
    pub owner_message: DeliveryStatus,
    pub development_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}
