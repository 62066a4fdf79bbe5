//! WhatsApp Cloud API client.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::Serialize;

use crate::config::Credentials;

/// Provider error code for a recipient missing from the test allow-list.
const ALLOW_LIST_CODE: &str = "131030";

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("WhatsApp request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("WhatsApp API error ({status}): {body}")]
    Api { status: u16, body: String },
}

impl SendError {
    /// True when the account is in development mode and the recipient has
    /// not been added to the allowed list in the Meta dashboard.
    pub fn is_allow_list_restriction(&self) -> bool {
        match self {
            Self::Api { body, .. } => {
                body.contains(ALLOW_LIST_CODE) || body.contains("not in allowed list")
            }
            Self::Http(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Template {
        name: String,
        language: String,
        params: Vec<String>,
    },
    Text {
        body: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Normalized digits, no `+`.
    pub to: String,
    pub kind: MessageKind,
}

impl OutboundMessage {
    pub fn template(to: &str, name: &str, language: &str, params: Vec<String>) -> Self {
        Self {
            to: to.to_string(),
            kind: MessageKind::Template {
                name: name.to_string(),
                language: language.to_string(),
                params,
            },
        }
    }

    pub fn text(to: &str, body: String) -> Self {
        Self {
            to: to.to_string(),
            kind: MessageKind::Text { body },
        }
    }

    pub fn payload(&self) -> Payload<'_> {
        let (kind, template, text) = match &self.kind {
            MessageKind::Template {
                name,
                language,
                params,
            } => {
                let components = if params.is_empty() {
                    Vec::new()
                } else {
                    vec![Component {
                        kind: "body",
                        parameters: params
                            .iter()
                            .map(|p| Parameter {
                                kind: "text",
                                text: p,
                            })
                            .collect(),
                    }]
                };
                let template = Template {
                    name,
                    language: Language { code: language },
                    components,
                };
                ("template", Some(template), None)
            }
            MessageKind::Text { body } => ("text", None, Some(Text { body })),
        };

        Payload {
            messaging_product: "whatsapp",
            to: &self.to,
            kind,
            template,
            text,
        }
    }
}

/// JSON body of `POST /{phone_number_id}/messages`.
#[derive(Debug, Serialize)]
pub struct Payload<'a> {
    messaging_product: &'static str,
    to: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    template: Option<Template<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<Text<'a>>,
}

#[derive(Debug, Serialize)]
struct Template<'a> {
    name: &'a str,
    language: Language<'a>,
    components: Vec<Component<'a>>,
}

#[derive(Debug, Serialize)]
struct Language<'a> {
    code: &'a str,
}

#[derive(Debug, Serialize)]
struct Component<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    parameters: Vec<Parameter<'a>>,
}

#[derive(Debug, Serialize)]
struct Parameter<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Text<'a> {
    body: &'a str,
}

/// Delivers one outbound message. The relay only depends on this, so tests
/// can swap the HTTP client for an in-memory one.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(
        &self,
        creds: &Credentials,
        message: &OutboundMessage,
    ) -> Result<serde_json::Value, SendError>;
}

pub struct WhatsAppClient {
    http: reqwest::Client,
    api_url: String,
}

impl WhatsAppClient {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, SendError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn messages_url(&self, phone_number_id: &str) -> String {
        format!("{}/{}/messages", self.api_url, phone_number_id)
    }
}

#[async_trait]
impl MessageSender for WhatsAppClient {
    async fn send(
        &self,
        creds: &Credentials,
        message: &OutboundMessage,
    ) -> Result<serde_json::Value, SendError> {
        let url = self.messages_url(&creds.phone_number_id);
        debug!("POST {} to={}", url, message.to);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&creds.access_token)
            .json(&message.payload())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SendError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use super::*;

    struct Received {
        phone_number_id: String,
        authorization: Option<String>,
        body: Value,
    }

    #[derive(Clone)]
    struct FakeGraph {
        status: StatusCode,
        received: Arc<Mutex<Vec<Received>>>,
    }

    async fn messages(
        State(graph): State<FakeGraph>,
        Path(phone_number_id): Path<String>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let authorization = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        graph.received.lock().unwrap().push(Received {
            phone_number_id,
            authorization,
            body,
        });

        let reply = if graph.status.is_success() {
            json!({ "messages": [{ "id": "wamid.test" }] })
        } else {
            json!({ "error": { "code": 131030, "message": "Recipient phone number not in allowed list" } })
        };
        (graph.status, Json(reply))
    }

    /// Serves `POST /v18.0/:id/messages` on a random local port.
    async fn fake_graph(status: StatusCode) -> (String, FakeGraph) {
        let graph = FakeGraph {
            status,
            received: Arc::new(Mutex::new(Vec::new())),
        };
        let app = Router::new()
            .route("/v18.0/:id/messages", post(messages))
            .with_state(graph.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/v18.0", addr), graph)
    }

    fn creds() -> Credentials {
        Credentials {
            phone_number_id: "1234567890".to_string(),
            access_token: "test-token".to_string(),
            owner_number: "919000000000".to_string(),
        }
    }

    #[tokio::test]
    async fn posts_bearer_authenticated_json() {
        let (url, graph) = fake_graph(StatusCode::OK).await;
        let client = WhatsAppClient::new(&url, Duration::from_secs(5)).unwrap();
        let msg = OutboundMessage::text("919876543210", "hello".to_string());

        let reply = client.send(&creds(), &msg).await.unwrap();
        assert_eq!(reply["messages"][0]["id"], "wamid.test");

        let received = graph.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].phone_number_id, "1234567890");
        assert_eq!(received[0].authorization.as_deref(), Some("Bearer test-token"));
        assert_eq!(
            received[0].body,
            json!({
                "messaging_product": "whatsapp",
                "to": "919876543210",
                "type": "text",
                "text": { "body": "hello" }
            })
        );
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let (url, _graph) = fake_graph(StatusCode::BAD_REQUEST).await;
        let client = WhatsAppClient::new(&url, Duration::from_secs(5)).unwrap();
        let msg = OutboundMessage::template("919876543210", "hello_world", "en", vec!["Asha".into()]);

        let err = client.send(&creds(), &msg).await.unwrap_err();
        match &err {
            SendError::Api { status, body } => {
                assert_eq!(*status, 400);
                assert!(body.contains("131030"));
            }
            other => panic!("expected an API error, got {}", other),
        }
        assert!(err.is_allow_list_restriction());
    }

    #[test]
    fn template_payload() {
        let msg = OutboundMessage::template(
            "919876543210",
            "hello_world",
            "en",
            vec!["Asha".to_string()],
        );
        let value = serde_json::to_value(msg.payload()).unwrap();
        assert_eq!(
            value,
            json!({
                "messaging_product": "whatsapp",
                "to": "919876543210",
                "type": "template",
                "template": {
                    "name": "hello_world",
                    "language": { "code": "en" },
                    "components": [{
                        "type": "body",
                        "parameters": [{ "type": "text", "text": "Asha" }]
                    }]
                }
            })
        );
    }

    #[test]
    fn template_without_params_has_no_components() {
        let msg = OutboundMessage::template("91", "hello_world", "en", Vec::new());
        let value = serde_json::to_value(msg.payload()).unwrap();
        assert_eq!(value["template"]["components"], json!([]));
    }

    #[test]
    fn text_payload() {
        let msg = OutboundMessage::text("919000000000", "hi".to_string());
        let value = serde_json::to_value(msg.payload()).unwrap();
        assert_eq!(
            value,
            json!({
                "messaging_product": "whatsapp",
                "to": "919000000000",
                "type": "text",
                "text": { "body": "hi" }
            })
        );
    }

    #[test]
    fn allow_list_restriction_detection() {
        let err = SendError::Api {
            status: 400,
            body: r#"{"error":{"code":131030,"message":"Recipient phone number not in allowed list"}}"#
                .to_string(),
        };
        assert!(err.is_allow_list_restriction());

        let err = SendError::Api {
            status: 401,
            body: "invalid token".to_string(),
        };
        assert!(!err.is_allow_list_restriction());
    }

    #[test]
    fn messages_url_trims_trailing_slash() {
        let client =
            WhatsAppClient::new("https://graph.facebook.com/v18.0/", Duration::from_secs(1))
                .unwrap();
        assert_eq!(
            client.messages_url("1234"),
            "https://graph.facebook.com/v18.0/1234/messages"
        );
    }
}
