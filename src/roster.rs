// src/roster.rs

use std::time::Duration;

use crate::error::{MonitorError, Result};
use crate::member::{CorpList, Member};

/// Sent on every outbound request, fetches and webhook deliveries alike.
pub const USER_AGENT: &str = "EveMemberWebhook/1.0 (github.com/dustify/eve-member-webhook)";

const EVEWHO_BASE_URL: &str = "https://evewho.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the EveWho corplist API.
#[derive(Clone, Debug)]
pub struct RosterClient {
    client: reqwest::Client,
    base_url: String,
}

impl RosterClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(EVEWHO_BASE_URL)
    }

    /// Build a client against an alternate base URL (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MonitorError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the current member roster for a corporation.
    ///
    /// Network errors, non-2xx responses, and non-JSON bodies are errors;
    /// a JSON body of any other shape yields an empty roster.
    pub async fn fetch_members(&self, corp_id: &str) -> Result<Vec<Member>> {
        let url = format!("{}/api/corplist/{}", self.base_url, corp_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MonitorError::Http(format!("GET {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MonitorError::Http(format!("GET {url} returned {status}")));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| MonitorError::Payload(format!("invalid JSON from {url}: {e}")))?;

        let list: CorpList = serde_json::from_value(body).unwrap_or_default();
        Ok(list.characters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetch_parses_characters_and_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/corplist/98735707"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "characters": [
                    { "character_id": 1, "name": "Alice" },
                    { "character_id": 2, "name": "Bob" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = RosterClient::with_base_url(server.uri()).unwrap();
        let members = client.fetch_members("98735707").await.unwrap();

        assert_eq!(members.len(), 2);
        assert_eq!(members[0].name, "Alice");
        assert_eq!(members[1].character_id, 2);
    }

    #[tokio::test]
    async fn missing_characters_field_yields_empty_roster() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "info": {} })))
            .mount(&server)
            .await;

        let client = RosterClient::with_base_url(server.uri()).unwrap();
        let members = client.fetch_members("98735707").await.unwrap();
        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn non_object_json_yields_empty_roster() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
            .mount(&server)
            .await;

        let client = RosterClient::with_base_url(server.uri()).unwrap();
        let members = client.fetch_members("98735707").await.unwrap();
        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn non_2xx_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = RosterClient::with_base_url(server.uri()).unwrap();
        let err = client.fetch_members("98735707").await.unwrap_err();
        assert!(matches!(err, MonitorError::Http(_)));
    }

    #[tokio::test]
    async fn non_json_body_is_a_payload_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let client = RosterClient::with_base_url(server.uri()).unwrap();
        let err = client.fetch_members("98735707").await.unwrap_err();
        assert!(matches!(err, MonitorError::Payload(_)));
    }
}
