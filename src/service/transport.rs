//! Transport
//!
//! Authenticated session wrapper around a [`reqwest::Client`]. Every
//! resource fetched through a transport keeps a clone of it so relation
//! accessors can issue follow-up requests against the same service.

use super::http::{sanitize_for_log, Verb, DEFAULT_SERVICE_ROOT, USER_AGENT};
use crate::error::{Error, Result};
use reqwest::header::{ACCEPT, CONNECTION, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Header carrying the Redfish session token.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Connection to a Redfish/Swordfish service
#[derive(Clone)]
pub struct Transport {
    endpoint: String,
    token: Arc<RwLock<Option<String>>>,
    http: Client,
}

impl Transport {
    /// Create a transport for `endpoint`, using `http` if given or a default
    /// client otherwise.
    pub fn new(endpoint: &str, http: Option<Client>) -> Result<Self> {
        if !endpoint.starts_with("http") {
            return Err(Error::InvalidEndpoint(endpoint.to_string()));
        }

        let http = match http {
            Some(client) => client,
            None => Client::builder()
                .user_agent(USER_AGENT)
                .pool_max_idle_per_host(0)
                .build()?,
        };

        Ok(Self {
            endpoint: endpoint.to_string(),
            token: Arc::new(RwLock::new(None)),
            http,
        })
    }

    /// Base endpoint every path is appended to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Set the session token sent with every subsequent request.
    /// Clones of this transport share the token.
    pub async fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        *self.token.write().await = if token.is_empty() { None } else { Some(token) };
    }

    /// Drop the session token; later requests are unauthenticated.
    pub async fn clear_token(&self) {
        *self.token.write().await = None;
    }

    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Absolute URL for a service-relative path.
    pub fn url_for(&self, path: &str) -> String {
        let path = if path.is_empty() { DEFAULT_SERVICE_ROOT } else { path };
        format!("{}{}", self.endpoint, path)
    }

    /// GET a resource. Succeeds on 200 only.
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.send(Verb::Get, path, None).await
    }

    /// POST to a resource or action target.
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Response> {
        self.send(Verb::Post, path, body).await
    }

    /// PUT a full replacement of a resource.
    pub async fn put(&self, path: &str, body: Option<&Value>) -> Result<Response> {
        self.send(Verb::Put, path, body).await
    }

    /// PATCH part of a resource.
    pub async fn patch(&self, path: &str, body: Option<&Value>) -> Result<Response> {
        self.send(Verb::Patch, path, body).await
    }

    /// DELETE a resource.
    pub async fn delete(&self, path: &str) -> Result<Response> {
        self.send(Verb::Delete, path, None).await
    }

    async fn send(&self, verb: Verb, path: &str, body: Option<&Value>) -> Result<Response> {
        let url = self.url_for(path);
        tracing::debug!("{} {}", verb.method(), url);

        let mut request = self
            .http
            .request(verb.method(), &url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(ACCEPT, "application/json")
            .header(CONNECTION, "close");

        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }

        if let Some(token) = self.token.read().await.as_deref() {
            request = request.header(AUTH_TOKEN_HEADER, token);
        }

        let response = request.send().await?;

        let status = response.status();
        if verb.accepts(status) {
            return Ok(response);
        }

        let body = response.text().await?;
        // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
        tracing::debug!("{} {} rejected: {} - {}", verb.method(), url, status, sanitize_for_log(&body));

        Err(Error::RequestFailed {
            status: status.as_u16(),
            body,
        })
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_http_endpoint() {
        let err = Transport::new("ftp://bmc.local", None).unwrap_err();
        assert!(matches!(err, Error::InvalidEndpoint(ref e) if e == "ftp://bmc.local"));

        assert!(matches!(
            Transport::new("bmc.local", None),
            Err(Error::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_new_accepts_http_and_https() {
        assert!(Transport::new("http://bmc.local", None).is_ok());
        assert!(Transport::new("https://10.0.0.5:8443", None).is_ok());
    }

    #[test]
    fn test_empty_path_maps_to_service_root() {
        let transport = Transport::new("https://bmc.local", None).unwrap();
        assert_eq!(transport.url_for(""), "https://bmc.local/redfish/v1/");
        assert_eq!(
            transport.url_for("/redfish/v1/Systems"),
            "https://bmc.local/redfish/v1/Systems"
        );
    }

    #[tokio::test]
    async fn test_token_is_shared_between_clones() {
        let transport = Transport::new("https://bmc.local", None).unwrap();
        let clone = transport.clone();

        transport.set_token("abc123").await;
        assert!(clone.has_token().await);

        clone.clear_token().await;
        assert!(!transport.has_token().await);
    }

    #[tokio::test]
    async fn test_empty_token_means_unauthenticated() {
        let transport = Transport::new("https://bmc.local", None).unwrap();
        transport.set_token("").await;
        assert!(!transport.has_token().await);
    }

    #[test]
    fn test_debug_does_not_print_token() {
        let transport = Transport::new("https://bmc.local", None).unwrap();
        let rendered = format!("{:?}", transport);
        assert!(rendered.contains("bmc.local"));
        assert!(!rendered.contains("token"));
    }
}
