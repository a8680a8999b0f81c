// LIFX HTTP client
//
// Wraps `reqwest::Client` with LIFX URL construction, bearer auth, and
// status handling. The token is supplied per call so the caller decides
// where credentials live (memory, keyring, config).

use reqwest::{RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{Light, LightStatePayload, Scene};
use crate::transport::TransportConfig;

/// Base URL of the public LIFX HTTP API.
pub const DEFAULT_BASE_URL: &str = "https://api.lifx.com/v1/";

/// Raw HTTP client for the LIFX cloud API.
#[derive(Debug, Clone)]
pub struct LifxClient {
    http: reqwest::Client,
    base_url: Url,
}

impl LifxClient {
    /// Create a client from a `TransportConfig`.
    ///
    /// `base_url` is the API root; a missing trailing slash is added so
    /// relative endpoint paths resolve beneath it.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// `GET lights/all`
    pub async fn list_lights(&self, token: &SecretString) -> Result<Vec<Light>, Error> {
        let url = self.url("lights/all")?;
        debug!("GET {url}");
        fetch_json(self.http.get(url), token).await
    }

    /// `PUT lights/{selector}/state`
    ///
    /// The selector goes into the path as given; callers check it with
    /// [`validate_selector`](crate::validate_selector) first.
    pub async fn set_state(
        &self,
        token: &SecretString,
        selector: &str,
        payload: &LightStatePayload,
    ) -> Result<(), Error> {
        let url = self.url(&format!("lights/{selector}/state"))?;
        debug!("PUT {url}");
        send(self.http.put(url).json(payload), token).await
    }

    /// `POST lights/{selector}/toggle`
    pub async fn toggle_power(&self, token: &SecretString, selector: &str) -> Result<(), Error> {
        let url = self.url(&format!("lights/{selector}/toggle"))?;
        debug!("POST {url}");
        send(self.http.post(url), token).await
    }

    /// `GET scenes`
    pub async fn list_scenes(&self, token: &SecretString) -> Result<Vec<Scene>, Error> {
        let url = self.url("scenes")?;
        debug!("GET {url}");
        fetch_json(self.http.get(url), token).await
    }

    /// `PUT scenes/scene_id:{uuid}/activate`
    pub async fn activate_scene(&self, token: &SecretString, uuid: &str) -> Result<(), Error> {
        let url = self.url(&format!("scenes/scene_id:{uuid}/activate"))?;
        debug!("PUT {url}");
        send(self.http.put(url).json(&serde_json::json!({})), token).await
    }

    // ── Request helpers ──────────────────────────────────────────────

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }
}

async fn send(request: RequestBuilder, token: &SecretString) -> Result<(), Error> {
    let resp = request.bearer_auth(token.expose_secret()).send().await?;
    check_status(resp).await?;
    Ok(())
}

async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    token: &SecretString,
) -> Result<T, Error> {
    let resp = request.bearer_auth(token.expose_secret()).send().await?;
    let body = check_status(resp).await?.text().await?;

    serde_json::from_str(&body).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body,
    })
}

/// Map non-success statuses to errors, keeping the body for diagnostics.
async fn check_status(resp: Response) -> Result<Response, Error> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
        return Err(Error::Unauthorized {
            status: status.as_u16(),
        });
    }

    let body = resp.text().await.unwrap_or_default();
    Err(Error::Api {
        status: status.as_u16(),
        body,
    })
}
