use crate::error::RelayError;
use crate::phone;
use crate::types::{PropertyType, SendRequest};

/// A consultation request that passed validation. Lives for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub name: String,
    /// Normalized: digits only, country code included.
    pub phone: String,
    /// Canonical label when it names a known [`PropertyType`], otherwise
    /// the client's text as sent.
    pub property_type: String,
    pub location: String,
    pub wants_updates: bool,
}

fn required(field: Option<String>) -> Option<String> {
    field
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Lead {
    pub fn from_request(req: SendRequest, country_code: &str) -> Result<Self, RelayError> {
        let (Some(name), Some(phone), Some(property_type), Some(location)) = (
            required(req.name),
            required(req.phone),
            required(req.property_type),
            required(req.location),
        ) else {
            return Err(RelayError::Validation("Missing required fields".to_string()));
        };

        let property_type = match property_type.parse::<PropertyType>() {
            Ok(known) => known.label().to_string(),
            Err(_) => property_type,
        };

        Ok(Self {
            name,
            phone: phone::normalize(&phone, country_code),
            property_type,
            location,
            wants_updates: req.wants_updates.unwrap_or(true),
        })
    }

    /// Free-text summary delivered to the owner.
    pub fn owner_summary(&self) -> String {
        format!(
            "🏠 New Consultation Request\n\
             \n\
             👤 Name: {}\n\
             📱 Phone: +{}\n\
             🏘️ Property Type: {}\n\
             📍 Location: {}\n\
             \n\
             Please contact the client soon!",
            self.name, self.phone, self.property_type, self.location
        )
    }
}
