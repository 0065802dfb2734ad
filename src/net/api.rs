//! HTTP access to the monitoring service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the session
//! cookie attached (`credentials: include`). Server-side (SSR): stubs
//! returning transport errors, since these endpoints are only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Rejected`], carrying the service's
//! `{error}` reason when one parses; unreachable hosts and unreadable
//! bodies become [`ApiError::Transport`]. Callers map both to inline UI
//! text rather than propagating them.

#![allow(clippy::unused_async)]

use crate::net::types::{ApiError, Incident};

/// Build-time override for the service origin; empty means same origin.
#[cfg(feature = "hydrate")]
const API_BASE: &str = match option_env!("WATCHBOARD_API_BASE") {
    Some(base) => base,
    None => "",
};

/// Network surface of the monitoring service.
///
/// The controller only talks to this trait; tests substitute a recording
/// fake.
#[allow(async_fn_in_trait)]
pub trait Collaborator {
    async fn login(&self, username: &str, password: &str) -> Result<(), ApiError>;
    async fn register(&self, username: &str, password: &str) -> Result<(), ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn fetch_incidents(&self) -> Result<Vec<Incident>, ApiError>;
}

/// HTTP client for the service endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpCollaborator;

impl HttpCollaborator {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "hydrate")]
fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(feature = "hydrate")]
#[derive(serde::Serialize)]
struct CredentialsBody<'a> {
    username: &'a str,
    password: &'a str,
}

/// POST credentials to a session endpoint and map the response.
#[cfg(feature = "hydrate")]
async fn post_credentials(path: &str, username: &str, password: &str) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::post(&api_url(path))
        .credentials(web_sys::RequestCredentials::Include)
        .json(&CredentialsBody { username, password })
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if resp.ok() {
        return Ok(());
    }

    let message = resp
        .json::<crate::net::types::ErrorBody>()
        .await
        .ok()
        .map(|body| body.error);
    Err(ApiError::Rejected { message })
}

impl Collaborator for HttpCollaborator {
    async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_credentials("/api/login/", username, password).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password);
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_credentials("/api/register/", username, password).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password);
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&api_url("/api/logout/"))
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if resp.ok() {
                Ok(())
            } else {
                Err(ApiError::Rejected { message: None })
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    async fn fetch_incidents(&self) -> Result<Vec<Incident>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&api_url("/api/incidents/"))
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Rejected { message: None });
            }
            resp.json::<Vec<Incident>>()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }
}
