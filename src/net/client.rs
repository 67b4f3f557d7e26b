//! Authorizing request client: the single choke point for API calls.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the session
//! token attached as a bearer credential. Server-side (SSR): stubs returning
//! an error since the API is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is delivered through the returned `Result`, never a panic.
//! A 401 clears the session, forces navigation to the login route, and still
//! rejects the call so the caller's failure path runs. Any other failure is
//! normalized to one human-readable message: the server's `message` body
//! field first, the transport error next, a generic fallback last.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::state::session::SessionStore;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::auth::LOGIN_PATH;

#[cfg(feature = "hydrate")]
use gloo_net::http::{Method, RequestBuilder, Response};

/// Base path prepended to every endpoint.
const DEFAULT_BASE_URL: &str = "/api";

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const UNKNOWN_API_ERROR: &str = "Unknown API error";

/// Normalized failure for every API call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Authorization was denied; the session has already been cleared and
    /// the user sent to the login route.
    #[error("session expired")]
    Unauthorized,
    /// Any other failed response or transport fault.
    #[error("{0}")]
    Message(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Shared HTTP gateway holding the session store and an injected
/// navigation capability.
#[derive(Clone)]
pub struct ApiClient {
    session: SessionStore,
    navigate: Callback<String>,
    base_url: String,
}

impl ApiClient {
    pub fn new(session: SessionStore, navigate: Callback<String>) -> Self {
        Self::with_base_url(session, navigate, DEFAULT_BASE_URL)
    }

    /// Client rooted at a non-default API prefix.
    pub fn with_base_url(session: SessionStore, navigate: Callback<String>, base_url: &str) -> Self {
        Self {
            session,
            navigate,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET` returning a JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.send(self.request(Method::GET, path)).await?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(server_stub())
        }
    }

    /// `POST` with a JSON body, returning a JSON body.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .request(Method::POST, path)
                .json(body)
                .map_err(|e| transport_error(e.to_string()))?;
            let resp = self.send_built(request).await?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(server_stub())
        }
    }

    /// `PUT` with a JSON body, returning a JSON body.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .request(Method::PUT, path)
                .json(body)
                .map_err(|e| transport_error(e.to_string()))?;
            let resp = self.send_built(request).await?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(server_stub())
        }
    }

    /// `DELETE`, ignoring any response body.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        #[cfg(feature = "hydrate")]
        {
            let _resp = self.send(self.request(Method::DELETE, path)).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(server_stub())
        }
    }
}

#[cfg(feature = "hydrate")]
impl ApiClient {
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = RequestBuilder::new(&self.url(path)).method(method);
        if let Some(value) = authorization_header(&self.session) {
            builder = builder.header("Authorization", &value);
        }
        builder
    }

    async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let resp = builder
            .send()
            .await
            .map_err(|e| transport_error(e.to_string()))?;
        self.check_status(resp).await
    }

    async fn send_built(&self, request: gloo_net::http::Request) -> ApiResult<Response> {
        let resp = request
            .send()
            .await
            .map_err(|e| transport_error(e.to_string()))?;
        self.check_status(resp).await
    }

    async fn check_status(&self, resp: Response) -> ApiResult<Response> {
        if resp.status() == 401 {
            return Err(unauthorized(self.session, self.navigate));
        }
        if !resp.ok() {
            let server_message = resp.json::<ErrorBody>().await.ok().and_then(|body| body.message);
            let message = normalize_error_message(
                server_message,
                Some(request_failed_message(resp.status())),
            );
            leptos::logging::warn!("api error: {message}");
            return Err(ApiError::Message(message));
        }
        Ok(resp)
    }
}

/// Server-supplied error envelope; only the message field matters here.
#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    resp.json::<T>().await.map_err(|e| transport_error(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
fn server_stub() -> ApiError {
    ApiError::Message("not available on server".to_owned())
}

/// Bearer header for the current session, if signed in.
#[cfg(any(test, feature = "hydrate"))]
fn authorization_header(session: &SessionStore) -> Option<String> {
    session.token().map(|token| bearer_header_value(&token))
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Pick the user-facing message for a failed call: server message first,
/// transport message next, generic fallback last.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn normalize_error_message(
    server_message: Option<String>,
    transport_message: Option<String>,
) -> String {
    server_message
        .filter(|m| !m.trim().is_empty())
        .or_else(|| transport_message.filter(|m| !m.trim().is_empty()))
        .unwrap_or_else(|| UNKNOWN_API_ERROR.to_owned())
}

#[cfg(feature = "hydrate")]
fn transport_error(detail: String) -> ApiError {
    ApiError::Message(normalize_error_message(None, Some(detail)))
}

/// Tear down the session after an authorization-denied response.
///
/// The store is cleared before the navigation fires so any observer sees
/// the anonymous session first; callers still receive the rejection.
/// Re-running this for concurrent 401s is harmless.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn unauthorized(session: SessionStore, navigate: Callback<String>) -> ApiError {
    leptos::logging::warn!("authorization rejected, signing out");
    session.clear();
    navigate.run(LOGIN_PATH.to_owned());
    ApiError::Unauthorized
}

/// Grab the shared client from context.
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}
