use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use subtle::ConstantTimeEq;
use uuid::Uuid;

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Basic-auth settings for the `/api/insight/*` routes.
///
/// When no credential pair is configured the server accepts any well-formed
/// `Basic` header — the original mock's behavior for local iteration. A
/// missing or malformed header is rejected either way.
#[derive(Debug, Clone)]
pub struct BasicAuthState {
    expected: Option<(String, String)>,
}

impl BasicAuthState {
    #[must_use]
    pub fn new(client_id: Option<String>, client_secret: Option<String>) -> Self {
        let expected = match (client_id, client_secret) {
            (Some(id), Some(secret)) => Some((id, secret)),
            _ => {
                tracing::warn!(
                    "PROSPECTOR_CLIENT_ID/SECRET not both set; accepting any well-formed Basic credentials"
                );
                None
            }
        };
        Self { expected }
    }

    /// Compares presented credentials in constant time when a pair is
    /// configured.
    fn allows(&self, client_id: &str, client_secret: &str) -> bool {
        match &self.expected {
            None => true,
            Some((id, secret)) => {
                let id_ok = id.as_bytes().ct_eq(client_id.as_bytes());
                let secret_ok = secret.as_bytes().ct_eq(client_secret.as_bytes());
                bool::from(id_ok & secret_ok)
            }
        }
    }
}

/// Axum middleware that extracts or generates a request ID.
///
/// If the incoming request has an `x-request-id` header, that value is used.
/// Otherwise a new `UUIDv4` is generated. The ID is:
/// - Inserted into request extensions as [`RequestId`]
/// - Set on the response as the `x-request-id` header
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert("x-request-id", val);
    }

    res
}

/// Middleware enforcing Basic auth on the insight routes.
pub async fn require_basic_auth(
    State(auth): State<BasicAuthState>,
    req: Request,
    next: Next,
) -> Response {
    let credentials = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_basic_header);

    match credentials {
        Some((id, secret)) if auth.allows(&id, &secret) => next.run(req).await,
        _ => unauthorized(),
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "message": "Authentication required" })),
    )
        .into_response()
}

/// Parses `Basic <base64(id:secret)>`; `None` on any malformation.
fn parse_basic_header(value: &str) -> Option<(String, String)> {
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (id, secret) = text.split_once(':')?;
    Some((id.to_owned(), secret.to_owned()))
}
