//! HTTP client for the prospector provider API.
//!
//! Wraps `reqwest` with the two transport modes the provider supports:
//!
//! - **direct**: calls `/api/insight/...` on the provider host with HTTP
//!   Basic auth (static client id/secret); the response body is the payload.
//! - **proxied**: calls same-origin gateway routes with cookies enabled; the
//!   gateway wraps every payload in a `{jsonrpc, id, result}` envelope which
//!   this client unwraps, discarding the envelope metadata.
//!
//! The mode is chosen once at construction and fixed for the session. Every
//! call is bounded by the configured timeout and is never retried here — the
//! caller decides whether to retry.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use prospector_core::types::{Company, QueryClause, RawCompany};
use prospector_core::{AppConfig, TransportMode};

use crate::error::ProspectorError;
use crate::types::{
    AccountDetails, FilterDefinitions, FilterPreview, LandingPage, LeadReceipt, LoginStatus,
};

const USER_AGENT: &str = "prospector/0.1 (company-search)";

/// Static client id/secret pair used for Basic auth in direct mode.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .finish()
    }
}

#[derive(Debug)]
enum Mode {
    Direct(Credentials),
    Proxied,
}

/// Client for the prospector provider API.
///
/// Use [`ProspectorClient::direct`] for production or tests against the mock
/// server, [`ProspectorClient::proxied`] when running behind the host
/// gateway, or [`ProspectorClient::from_config`] to pick from [`AppConfig`].
#[derive(Debug)]
pub struct ProspectorClient {
    http: Client,
    base_url: Url,
    mode: Mode,
}

impl ProspectorClient {
    /// Creates a direct-mode client with Basic-auth credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ProspectorError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ProspectorError::Rejected`] if `base_url`
    /// is not a valid URL.
    pub fn direct(
        base_url: &str,
        client_id: &str,
        client_secret: &str,
        timeout_secs: u64,
    ) -> Result<Self, ProspectorError> {
        Ok(Self {
            http: build_http(timeout_secs, false)?,
            base_url: parse_base_url(base_url)?,
            mode: Mode::Direct(Credentials {
                client_id: client_id.to_owned(),
                client_secret: client_secret.to_owned(),
            }),
        })
    }

    /// Creates a proxied-mode client. Cookies are enabled so every call
    /// carries the host-session credentials the gateway expects.
    ///
    /// # Errors
    ///
    /// Returns [`ProspectorError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ProspectorError::Rejected`] if `base_url`
    /// is not a valid URL.
    pub fn proxied(base_url: &str, timeout_secs: u64) -> Result<Self, ProspectorError> {
        Ok(Self {
            http: build_http(timeout_secs, true)?,
            base_url: parse_base_url(base_url)?,
            mode: Mode::Proxied,
        })
    }

    /// Builds the client matching the configured transport mode.
    ///
    /// # Errors
    ///
    /// Returns [`ProspectorError::AuthenticationRequired`] when direct mode
    /// is configured without a client id/secret pair, plus the construction
    /// errors of [`ProspectorClient::direct`] / [`ProspectorClient::proxied`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ProspectorError> {
        match config.mode {
            TransportMode::Direct => {
                let (Some(id), Some(secret)) = (&config.client_id, &config.client_secret) else {
                    return Err(ProspectorError::AuthenticationRequired);
                };
                Self::direct(&config.base_url, id, secret, config.request_timeout_secs)
            }
            TransportMode::Proxied => Self::proxied(&config.base_url, config.request_timeout_secs),
        }
    }

    /// Fetches the filter definitions the provider currently supports.
    ///
    /// # Errors
    ///
    /// Any [`ProspectorError`] transport or decoding failure.
    pub async fn get_search_filters(&self) -> Result<FilterDefinitions, ProspectorError> {
        let body = self
            .request(
                Method::GET,
                "api/insight/filters",
                "prospector_get_search_filters",
                &[],
                None,
                true,
            )
            .await?;
        decode(body, "get_search_filters")
    }

    /// Fetches the static landing-page copy. The only unauthenticated call.
    ///
    /// # Errors
    ///
    /// Any [`ProspectorError`] transport or decoding failure.
    pub async fn get_landing_page_information(&self) -> Result<LandingPage, ProspectorError> {
        let body = self
            .request(
                Method::GET,
                "api/information/landingpage",
                "get_landing_page_information",
                &[],
                None,
                false,
            )
            .await?;
        decode(body, "get_landing_page_information")
    }

    /// Previews how many companies the given clauses would match.
    ///
    /// # Errors
    ///
    /// Any [`ProspectorError`] transport or decoding failure.
    pub async fn preview_filters(
        &self,
        clauses: &[QueryClause],
    ) -> Result<FilterPreview, ProspectorError> {
        let body = self
            .request(
                Method::POST,
                "api/insight/filters",
                "prospector_preview_filter_results",
                &[],
                Some(serde_json::to_value(clauses).map_err(|e| ProspectorError::Deserialize {
                    context: "preview_filters request body".to_string(),
                    source: e,
                })?),
                true,
            )
            .await?;
        decode(body, "preview_filters")
    }

    /// Runs the full prospect search for one page of results.
    ///
    /// Returns the raw provider records; callers normalize them via
    /// [`crate::normalize::normalize`].
    ///
    /// # Errors
    ///
    /// Any [`ProspectorError`] transport or decoding failure.
    pub async fn search_prospects(
        &self,
        clauses: &[QueryClause],
        skip: usize,
        take: usize,
    ) -> Result<Vec<RawCompany>, ProspectorError> {
        let body = self
            .request(
                Method::POST,
                "api/insight/prospects",
                "prospector_filter_results",
                &[("skip", skip.to_string()), ("take", take.to_string())],
                Some(serde_json::to_value(clauses).map_err(|e| ProspectorError::Deserialize {
                    context: "search_prospects request body".to_string(),
                    source: e,
                })?),
                true,
            )
            .await?;
        decode(body, "search_prospects")
    }

    /// Submits the given companies as leads in a single batch.
    ///
    /// # Errors
    ///
    /// Any [`ProspectorError`] transport or decoding failure.
    pub async fn create_leads(&self, companies: &[Company]) -> Result<LeadReceipt, ProspectorError> {
        let body = self
            .request(
                Method::POST,
                "api/insight/leads",
                "prospector_create_leads",
                &[],
                Some(
                    serde_json::to_value(companies).map_err(|e| ProspectorError::Deserialize {
                        context: "create_leads request body".to_string(),
                        source: e,
                    })?,
                ),
                true,
            )
            .await?;
        decode(body, "create_leads")
    }

    /// Checks whether the session credentials are accepted by the provider.
    ///
    /// # Errors
    ///
    /// Any [`ProspectorError`] transport or decoding failure.
    pub async fn validate_login(&self) -> Result<LoginStatus, ProspectorError> {
        let body = self
            .request(
                Method::GET,
                "api/insight/validatelogin",
                "prospector_validate_token",
                &[],
                None,
                true,
            )
            .await?;
        decode(body, "validate_login")
    }

    /// Fetches account and quota metadata.
    ///
    /// # Errors
    ///
    /// Any [`ProspectorError`] transport or decoding failure.
    pub async fn account_details(&self) -> Result<AccountDetails, ProspectorError> {
        let body = self
            .request(
                Method::GET,
                "api/insight/account",
                "prospector_my_account",
                &[],
                None,
                true,
            )
            .await?;
        decode(body, "account_details")
    }

    /// Sends one request in whichever mode the client was built for and
    /// returns the payload as JSON.
    ///
    /// In proxied mode the direct-mode verb is ignored: every gateway route
    /// is a JSON-RPC POST, and the payload is pulled out of the envelope.
    async fn request(
        &self,
        method: Method,
        direct_path: &str,
        proxied_path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
        authenticated: bool,
    ) -> Result<Value, ProspectorError> {
        match &self.mode {
            Mode::Direct(credentials) => {
                let url = self.build_url(direct_path, query)?;
                tracing::debug!(%url, %method, "prospector request (direct)");
                let mut req = self.http.request(method, url);
                if authenticated {
                    req = req.basic_auth(&credentials.client_id, Some(&credentials.client_secret));
                }
                if let Some(payload) = &body {
                    req = req.json(payload);
                }
                let response = req.send().await?;
                read_json(response, direct_path).await
            }
            Mode::Proxied => {
                let url = self.build_url(proxied_path, query)?;
                tracing::debug!(%url, "prospector request (proxied)");
                let rpc = serde_json::json!({
                    "jsonrpc": "2.0",
                    "method": "call",
                    "id": 0,
                    "params": body.unwrap_or(Value::Null),
                });
                let response = self.http.post(url).json(&rpc).send().await?;
                let envelope = read_json(response, proxied_path).await?;
                unwrap_envelope(envelope, proxied_path)
            }
        }
    }

    fn build_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ProspectorError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ProspectorError::Rejected {
                status: 0,
                message: format!("invalid endpoint path '{path}': {e}"),
            })?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

fn build_http(timeout_secs: u64, cookies: bool) -> Result<Client, ProspectorError> {
    let builder = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .cookie_store(cookies);
    Ok(builder.build()?)
}

/// Normalise: ensure the base URL ends with exactly one slash so that `join`
/// appends to the path rather than replacing the last segment.
fn parse_base_url(base_url: &str) -> Result<Url, ProspectorError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| ProspectorError::Rejected {
        status: 0,
        message: format!("invalid base URL '{base_url}': {e}"),
    })
}

/// Asserts a usable HTTP status and parses the body as JSON.
///
/// 401 maps to [`ProspectorError::AuthenticationRequired`], 404 to
/// [`ProspectorError::NotFound`], any other non-2xx to
/// [`ProspectorError::Rejected`] carrying the server's `message` field when
/// the error body has one.
async fn read_json(response: reqwest::Response, context: &str) -> Result<Value, ProspectorError> {
    let status = response.status();
    let text = response.text().await?;

    match status {
        StatusCode::UNAUTHORIZED => return Err(ProspectorError::AuthenticationRequired),
        StatusCode::NOT_FOUND => return Err(ProspectorError::NotFound(context.to_owned())),
        s if !s.is_success() => {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| {
                    v.get("message")
                        .and_then(Value::as_str)
                        .map(ToOwned::to_owned)
                })
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_owned()
                });
            return Err(ProspectorError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        _ => {}
    }

    serde_json::from_str(&text).map_err(|e| ProspectorError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}

/// Pulls `result` out of a `{jsonrpc, id, result}` envelope, discarding the
/// envelope metadata.
fn unwrap_envelope(envelope: Value, context: &str) -> Result<Value, ProspectorError> {
    let Value::Object(mut map) = envelope else {
        return Err(ProspectorError::Envelope {
            context: context.to_string(),
        });
    };
    if !map.contains_key("jsonrpc") {
        return Err(ProspectorError::Envelope {
            context: context.to_string(),
        });
    }
    map.remove("result").ok_or_else(|| ProspectorError::Envelope {
        context: context.to_string(),
    })
}

fn decode<T: DeserializeOwned>(value: Value, context: &str) -> Result<T, ProspectorError> {
    serde_json::from_value(value).map_err(|e| ProspectorError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_base_url_appends_single_trailing_slash() {
        let url = parse_base_url("http://localhost:3001").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3001/");
        let url = parse_base_url("http://localhost:3001///").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3001/");
    }

    #[test]
    fn parse_base_url_rejects_garbage() {
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn build_url_joins_path_and_query() {
        let client = ProspectorClient::direct("http://localhost:3001", "id", "secret", 10)
            .expect("client construction should not fail");
        let url = client
            .build_url(
                "api/insight/prospects",
                &[("skip", "0".to_string()), ("take", "25".to_string())],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3001/api/insight/prospects?skip=0&take=25"
        );
    }

    #[test]
    fn unwrap_envelope_extracts_result() {
        let envelope = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 0,
            "result": { "valid": true }
        });
        let result = unwrap_envelope(envelope, "test").unwrap();
        assert_eq!(result, serde_json::json!({ "valid": true }));
    }

    #[test]
    fn unwrap_envelope_rejects_missing_result() {
        let envelope = serde_json::json!({ "jsonrpc": "2.0", "id": 0 });
        assert!(matches!(
            unwrap_envelope(envelope, "test"),
            Err(ProspectorError::Envelope { .. })
        ));
    }

    #[test]
    fn unwrap_envelope_rejects_non_rpc_body() {
        let body = serde_json::json!([1, 2, 3]);
        assert!(matches!(
            unwrap_envelope(body, "test"),
            Err(ProspectorError::Envelope { .. })
        ));
    }

    #[test]
    fn from_config_direct_without_credentials_fails() {
        let config = prospector_core::AppConfig {
            env: prospector_core::Environment::Test,
            mode: TransportMode::Direct,
            base_url: "http://localhost:3001".to_string(),
            client_id: None,
            client_secret: None,
            request_timeout_secs: 10,
            bind_addr: "127.0.0.1:3001".parse().unwrap(),
            log_level: "info".to_string(),
            fixtures_path: "./fixtures/companies.json".into(),
        };
        assert!(matches!(
            ProspectorClient::from_config(&config),
            Err(ProspectorError::AuthenticationRequired)
        ));
    }
}
