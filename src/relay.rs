//! Turns a validated lead into the two outbound WhatsApp messages.

use log::{error, info, warn};
use serde::Serialize;
use uuid::Uuid;

use crate::config::{Config, Credentials};
use crate::lead::Lead;
use crate::phone;
use crate::whatsapp::{MessageSender, OutboundMessage};

pub const DEVELOPMENT_MODE_NOTE: &str = "WhatsApp is in development mode. Add recipient numbers to allowed list in Meta dashboard to send messages.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Failed,
    Skipped,
}

/// `Delivered` when every attempted message went out, `Failed` when none
/// did, `Partial` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Delivered,
    Partial,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReport {
    pub client: DeliveryStatus,
    pub owner: DeliveryStatus,
    pub development_mode: bool,
}

impl RelayReport {
    pub fn outcome(&self) -> Outcome {
        let statuses = [self.client, self.owner];
        let sent = statuses.iter().filter(|s| **s == DeliveryStatus::Sent).count();
        let failed = statuses
            .iter()
            .filter(|s| **s == DeliveryStatus::Failed)
            .count();
        match (sent, failed) {
            (_, 0) if sent > 0 => Outcome::Delivered,
            (0, _) => Outcome::Failed,
            _ => Outcome::Partial,
        }
    }

    pub fn note(&self) -> Option<String> {
        self.development_mode
            .then(|| DEVELOPMENT_MODE_NOTE.to_string())
    }
}

/// Sends the greeting template to the lead (when they opted in) and then the
/// summary to the owner. A failed call is logged and reported, never
/// propagated, so the second call always runs.
pub async fn relay(
    id: Uuid,
    lead: &Lead,
    config: &Config,
    creds: &Credentials,
    sender: &dyn MessageSender,
) -> RelayReport {
    let mut development_mode = false;

    let client = if lead.wants_updates {
        let greeting = OutboundMessage::template(
            &lead.phone,
            &config.template_name,
            &config.template_language,
            vec![lead.name.clone()],
        );
        match sender.send(creds, &greeting).await {
            Ok(_) => {
                info!("[{}] greeting sent to +{}", id, lead.phone);
                DeliveryStatus::Sent
            }
            Err(e) => {
                error!("[{}] failed to send client message: {}", id, e);
                if e.is_allow_list_restriction() {
                    warn!(
                        "[{}] WhatsApp API in development mode, add +{} to the allowed list in the Meta dashboard",
                        id, lead.phone
                    );
                    development_mode = true;
                }
                DeliveryStatus::Failed
            }
        }
    } else {
        info!("[{}] lead declined WhatsApp updates, no greeting", id);
        DeliveryStatus::Skipped
    };

    let owner_number = phone::normalize(&creds.owner_number, &config.country_code);
    let summary = OutboundMessage::text(&owner_number, lead.owner_summary());
    let owner = match sender.send(creds, &summary).await {
        Ok(_) => {
            info!("[{}] owner notified", id);
            DeliveryStatus::Sent
        }
        Err(e) => {
            error!("[{}] failed to send owner notification: {}", id, e);
            DeliveryStatus::Failed
        }
    };

    RelayReport {
        client,
        owner,
        development_mode,
    }
}
