//! Request gateway: the single chokepoint for calls to the admin API.
//!
//! # Design
//! - Request construction is pure (`Gateway::prepare`) so URL, header, and body
//!   rules are unit tested without a browser.
//! - Sending never fails from the caller's point of view: every outcome is
//!   normalised into a [`Reply`], and callers branch on it.
//! - Network I/O sits behind [`Transport`]; the browser adapter lives in
//!   `services::transport`.

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::config::AppConfig;

/// HTTP verbs used by the admin API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Upper-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether a JSON payload is serialised for this verb.
    #[must_use]
    pub const fn sends_body(self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request payload supplied by callers.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody<F> {
    /// No payload.
    Empty,
    /// Key/value payload serialised as JSON.
    Json(Value),
    /// Native multipart form, passed through untouched.
    Form(F),
}

impl<F> RequestBody<F> {
    /// Serialise any `Serialize` value into a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the value cannot be represented as JSON.
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Self::Json)
    }
}

/// Payload attached to a prepared request.
#[derive(Clone, Debug, PartialEq)]
pub enum PreparedBody<F> {
    /// Nothing is sent.
    None,
    /// Serialised JSON text.
    Text(String),
    /// Multipart form data.
    Form(F),
}

/// Fully-resolved request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest<F> {
    /// HTTP verb.
    pub method: Method,
    /// Absolute URL.
    pub url: String,
    /// Ordered header list; later entries win.
    pub headers: Vec<(String, String)>,
    /// Payload.
    pub body: PreparedBody<F>,
}

impl<F> PreparedRequest<F> {
    /// Look up a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response returned by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

/// Errors raised below the HTTP layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Request could not be built or sent.
    #[error("Network error: {0}")]
    Network(String),
    /// Response arrived but its body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Executes prepared requests.
#[async_trait(?Send)]
pub trait Transport {
    /// Native multipart form type.
    type Form;

    /// Perform the request and return the raw response.
    async fn execute(
        &self,
        request: PreparedRequest<Self::Form>,
    ) -> Result<RawResponse, TransportError>;
}

/// Supplies the bearer token attached to outgoing requests.
pub trait TokenSource {
    /// Current token, if a session exists.
    fn token(&self) -> Option<String>;
}

/// Normalised failure: transport, HTTP, application, or decode errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    /// User-facing message; never empty.
    pub message: String,
    /// API origin the request targeted.
    pub base_url: String,
    /// Absolute URL of the failed request.
    pub url: String,
    /// HTTP status when a response was received.
    pub status: Option<u16>,
}

impl Failure {
    /// Client-side failure raised before any request is sent.
    #[must_use]
    pub fn local(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            base_url: String::new(),
            url: String::new(),
            status: None,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of [`Gateway::send`].
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    /// 2xx response whose body carried `success: true`, exactly as received.
    Ok(Map<String, Value>),
    /// Anything else.
    Failed(Failure),
}

impl Reply {
    /// Whether the call succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Convert into a plain result over the raw JSON object.
    ///
    /// # Errors
    ///
    /// Returns the carried [`Failure`] for failed replies.
    pub fn into_result(self) -> Result<Map<String, Value>, Failure> {
        match self {
            Self::Ok(body) => Ok(body),
            Self::Failed(failure) => Err(failure),
        }
    }

    /// Decode a successful reply into a typed envelope.
    ///
    /// # Errors
    ///
    /// Returns the carried failure, or a failure describing the shape mismatch.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, Failure> {
        let body = self.into_result()?;
        serde_json::from_value(Value::Object(body))
            .map_err(|err| Failure::local(format!("Unexpected response shape: {err}")))
    }
}

/// API client built on a transport and a token source.
pub struct Gateway<T, S> {
    config: AppConfig,
    transport: T,
    tokens: S,
}

impl<T, S> Gateway<T, S>
where
    T: Transport,
    S: TokenSource,
{
    /// Construct a gateway.
    #[must_use]
    pub const fn new(config: AppConfig, transport: T, tokens: S) -> Self {
        Self {
            config,
            transport,
            tokens,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Absolute URL for an API-relative path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if self.config.api_prefix.is_empty() {
            format!("{}/{path}", self.config.base_url)
        } else {
            format!(
                "{}/{}/{path}",
                self.config.base_url, self.config.api_prefix
            )
        }
    }

    /// Build the request without sending it.
    #[must_use]
    pub fn prepare(
        &self,
        method: Method,
        path: &str,
        body: RequestBody<T::Form>,
        extra_headers: &[(&str, &str)],
    ) -> PreparedRequest<T::Form> {
        let mut headers = Vec::with_capacity(extra_headers.len() + 2);
        if !matches!(body, RequestBody::Form(_)) {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        headers.extend(
            extra_headers
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string())),
        );
        if let Some(token) = self
            .tokens
            .token()
            .filter(|token| !token.trim().is_empty())
        {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        let body = match body {
            RequestBody::Empty => PreparedBody::None,
            RequestBody::Json(value) if method.sends_body() => PreparedBody::Text(value.to_string()),
            RequestBody::Json(_) => PreparedBody::None,
            RequestBody::Form(form) => PreparedBody::Form(form),
        };
        PreparedRequest {
            method,
            url: self.url_for(path),
            headers,
            body,
        }
    }

    /// Send a request and normalise the outcome.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: RequestBody<T::Form>,
        extra_headers: &[(&str, &str)],
    ) -> Reply {
        let request = self.prepare(method, path, body, extra_headers);
        let url = request.url.clone();
        let fail = |message: String, status: Option<u16>| {
            Reply::Failed(Failure {
                message,
                base_url: self.config.base_url.clone(),
                url: url.clone(),
                status,
            })
        };

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(err) => return fail(err.to_string(), None),
        };
        let status = response.status;
        let parsed = match serde_json::from_str::<Value>(&response.body) {
            Ok(value) => value,
            Err(err) => return fail(format!("Invalid JSON response: {err}"), Some(status)),
        };
        let server_message = parsed
            .get("message")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(str::to_string);

        if !(200..300).contains(&status) {
            return fail(
                server_message.unwrap_or_else(|| format!("HTTP error! Status: {status}")),
                Some(status),
            );
        }
        match parsed {
            Value::Object(map) if map.get("success") == Some(&Value::Bool(true)) => Reply::Ok(map),
            _ => fail(
                server_message.unwrap_or_else(|| "Request failed".to_string()),
                Some(status),
            ),
        }
    }

    async fn call<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody<T::Form>,
    ) -> Result<R, Failure> {
        let url = self.url_for(path);
        self.send(method, path, body, &[])
            .await
            .decode()
            .map_err(|failure| Failure {
                base_url: self.config.base_url.clone(),
                url,
                ..failure
            })
    }

    /// `GET` and decode.
    ///
    /// # Errors
    ///
    /// Returns the normalised failure.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, Failure> {
        self.call(Method::Get, path, RequestBody::Empty).await
    }

    /// `POST` a JSON payload and decode.
    ///
    /// # Errors
    ///
    /// Returns the normalised failure; serialisation errors become local failures.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, Failure>
    where
        B: serde::Serialize,
        R: DeserializeOwned,
    {
        let body = RequestBody::json(body)
            .map_err(|err| Failure::local(format!("Could not encode request: {err}")))?;
        self.call(Method::Post, path, body).await
    }

    /// `POST` a multipart form and decode.
    ///
    /// # Errors
    ///
    /// Returns the normalised failure.
    pub async fn post_form<R: DeserializeOwned>(
        &self,
        path: &str,
        form: T::Form,
    ) -> Result<R, Failure> {
        self.call(Method::Post, path, RequestBody::Form(form)).await
    }

    /// `PUT` with an empty JSON object and decode.
    ///
    /// # Errors
    ///
    /// Returns the normalised failure.
    pub async fn put<R: DeserializeOwned>(&self, path: &str) -> Result<R, Failure> {
        self.call(Method::Put, path, RequestBody::Json(Value::Object(Map::new())))
            .await
    }

    /// `DELETE` and decode.
    ///
    /// # Errors
    ///
    /// Returns the normalised failure.
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, Failure> {
        self.call(Method::Delete, path, RequestBody::Json(Value::Object(Map::new())))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::cell::RefCell;

    struct Scripted {
        outcome: Result<RawResponse, TransportError>,
        seen: RefCell<Vec<PreparedRequest<&'static str>>>,
    }

    impl Scripted {
        fn status(status: u16, body: &str) -> Self {
            Self {
                outcome: Ok(RawResponse {
                    status,
                    body: body.to_string(),
                }),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn offline() -> Self {
            Self {
                outcome: Err(TransportError::Network("Failed to fetch".to_string())),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl Transport for Scripted {
        type Form = &'static str;

        async fn execute(
            &self,
            request: PreparedRequest<Self::Form>,
        ) -> Result<RawResponse, TransportError> {
            self.seen.borrow_mut().push(request);
            self.outcome.clone()
        }
    }

    struct Token(Option<&'static str>);

    impl TokenSource for Token {
        fn token(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    fn gateway(transport: Scripted, token: Option<&'static str>) -> Gateway<Scripted, Token> {
        Gateway::new(AppConfig::default(), transport, Token(token))
    }

    #[test]
    fn prepare_builds_url_and_json_headers() {
        let gw = gateway(Scripted::offline(), Some("abc"));
        let request = gw.prepare(
            Method::Post,
            "/spray/create",
            RequestBody::Json(json!({"name": "Copper"})),
            &[("X-Trace", "1")],
        );
        assert_eq!(
            request.url,
            "https://agribot-hydro-nft-admin.netlify.app/.netlify/functions/api/spray/create"
        );
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("authorization"), Some("Bearer abc"));
        assert_eq!(request.header("x-trace"), Some("1"));
        assert_eq!(
            request.body,
            PreparedBody::Text(r#"{"name":"Copper"}"#.to_string())
        );
    }

    #[test]
    fn prepare_skips_body_for_get_and_blank_tokens() {
        let gw = gateway(Scripted::offline(), Some("  "));
        let request = gw.prepare(
            Method::Get,
            "plant/get-all",
            RequestBody::Json(json!({"ignored": true})),
            &[],
        );
        assert_eq!(request.body, PreparedBody::None);
        assert_eq!(request.header("authorization"), None);
    }

    #[test]
    fn prepare_passes_forms_without_content_type() {
        let gw = gateway(Scripted::offline(), None);
        let request = gw.prepare(Method::Post, "admin/update/4", RequestBody::Form("form"), &[]);
        assert_eq!(request.header("content-type"), None);
        assert_eq!(request.body, PreparedBody::Form("form"));
    }

    #[tokio::test]
    async fn network_failure_resolves_to_failure() {
        let gw = gateway(Scripted::offline(), None);
        let reply = gw.send(Method::Get, "log/get-all", RequestBody::Empty, &[]).await;
        let Reply::Failed(failure) = reply else {
            panic!("expected failure");
        };
        assert!(!failure.message.is_empty());
        assert!(failure.message.contains("Failed to fetch"));
        assert_eq!(failure.base_url, "https://agribot-hydro-nft-admin.netlify.app");
        assert!(failure.url.ends_with("/log/get-all"));
        assert_eq!(failure.status, None);
    }

    #[tokio::test]
    async fn success_returns_body_verbatim() {
        let gw = gateway(Scripted::status(200, r#"{"success":true,"foo":"bar"}"#), None);
        let reply = gw.send(Method::Get, "x", RequestBody::Empty, &[]).await;
        let expected = json!({"success": true, "foo": "bar"});
        assert_eq!(reply, Reply::Ok(expected.as_object().cloned().unwrap_or_default()));
    }

    #[tokio::test]
    async fn http_errors_prefer_server_message() {
        let gw = gateway(
            Scripted::status(401, r#"{"success":false,"message":"Invalid credentials"}"#),
            None,
        );
        let reply = gw.send(Method::Post, "admin/login", RequestBody::Empty, &[]).await;
        let failure = reply.into_result().err().unwrap_or_else(|| panic!("expected failure"));
        assert_eq!(failure.message, "Invalid credentials");
        assert_eq!(failure.status, Some(401));

        let gw = gateway(Scripted::status(500, "{}"), None);
        let failure = gw
            .send(Method::Get, "x", RequestBody::Empty, &[])
            .await
            .into_result()
            .err()
            .unwrap_or_else(|| panic!("expected failure"));
        assert_eq!(failure.message, "HTTP error! Status: 500");
    }

    #[tokio::test]
    async fn invalid_json_and_soft_failures_are_normalised() {
        let gw = gateway(Scripted::status(200, "<html>"), None);
        let failure = gw
            .send(Method::Get, "x", RequestBody::Empty, &[])
            .await
            .into_result()
            .err()
            .unwrap_or_else(|| panic!("expected failure"));
        assert!(failure.message.starts_with("Invalid JSON response"));

        let gw = gateway(Scripted::status(200, r#"{"success":false}"#), None);
        let failure = gw
            .send(Method::Get, "x", RequestBody::Empty, &[])
            .await
            .into_result()
            .err()
            .unwrap_or_else(|| panic!("expected failure"));
        assert_eq!(failure.message, "Request failed");
    }

    #[tokio::test]
    async fn typed_helpers_decode_envelopes() {
        #[derive(Deserialize)]
        struct Count {
            count: u64,
        }
        let transport = Scripted::status(200, r#"{"success":true,"count":12}"#);
        let gw = gateway(transport, Some("tok"));
        let count: Count = gw.get("plant/count").await.unwrap_or_else(|f| panic!("{f}"));
        assert_eq!(count.count, 12);
        let seen = gw.transport.seen.borrow();
        assert_eq!(seen[0].method, Method::Get);
        assert_eq!(seen[0].header("Authorization"), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn decode_mismatch_keeps_request_context() {
        #[derive(Debug, Deserialize)]
        struct Count {
            #[allow(dead_code)]
            count: u64,
        }
        let gw = gateway(Scripted::status(200, r#"{"success":true}"#), None);
        let failure = gw
            .get::<Count>("plant/count")
            .await
            .err()
            .unwrap_or_else(|| panic!("expected failure"));
        assert!(failure.message.starts_with("Unexpected response shape"));
        assert!(failure.url.ends_with("/plant/count"));
    }
}
