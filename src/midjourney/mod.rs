pub mod describe_client;
pub mod faceswap_client;
pub mod imagine_client;
pub mod seed_client;
pub mod upscale_client;

use crate::{
    config::MidjourneyConfig,
    error::{MidjourneyError, Result},
    logger,
    models::ResultRequest,
};
use reqwest::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    multipart::Form,
    Client, Response,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// Client for the midjourneyapi.io REST API.
///
/// Every method issues exactly one POST and returns the decoded body. Nothing
/// is retried or polled; submit-style calls hand back a task id that the
/// caller passes to the matching `*_result` method.
#[derive(Clone)]
pub struct MidjourneyClient {
    http: Client,
    api_key: String,
    base_url: String,
    strict_status: bool,
}

impl MidjourneyClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let config = MidjourneyConfig::new();
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: config.base_url(),
            strict_status: config.strict_status,
        }
    }

    pub fn with_config(config: MidjourneyConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            MidjourneyError::ConfigError(format!("Failed to build HTTP client: {}", e))
        })?;

        Self::with_http_client(config, http)
    }

    /// Uses a caller-supplied transport; `config.timeout_secs` is ignored.
    pub fn with_http_client(config: MidjourneyConfig, http: Client) -> Result<Self> {
        let base_url = config.base_url();
        let api_key = config
            .api_key
            .ok_or_else(|| MidjourneyError::ConfigError("Midjourney API key is required".into()))?;

        Ok(Self {
            http,
            api_key,
            base_url,
            strict_status: config.strict_status,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::with_config(MidjourneyConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Polls `/result` once and decodes into any result shape.
    pub async fn result<T>(&self, task_id: &str, position: Option<u32>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = ResultRequest {
            task_id: task_id.to_string(),
            position,
        };
        self.post_json("/result", &request).await
    }

    pub(crate) async fn post_json<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_vec(request)
            .map_err(|e| MidjourneyError::EncodeError(e.to_string()))?;

        let timer = logger::timer(path);
        let response = self
            .http
            .post(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, self.api_key.as_str())
            .body(body)
            .send()
            .await
            .map_err(|e| {
                log::error!("POST {} failed [req:{}]: {}", path, timer.request_id(), e);
                MidjourneyError::RequestError(e)
            })?;

        self.decode(path, response).await
    }

    pub(crate) async fn post_multipart<Resp>(&self, path: &str, form: Form) -> Result<Resp>
    where
        Resp: DeserializeOwned,
    {
        let timer = logger::timer(path);
        let response = self
            .http
            .post(self.url(path))
            .header(AUTHORIZATION, self.api_key.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                log::error!("POST {} failed [req:{}]: {}", path, timer.request_id(), e);
                MidjourneyError::RequestError(e)
            })?;

        self.decode(path, response).await
    }

    async fn decode<Resp>(&self, path: &str, response: Response) -> Result<Resp>
    where
        Resp: DeserializeOwned,
    {
        let status = response.status();
        let bytes = response.bytes().await?;

        if self.strict_status && !status.is_success() {
            return Err(MidjourneyError::ApiError {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            log::warn!("Could not decode {} response (HTTP {}): {}", path, status, e);
            MidjourneyError::DecodeError(e)
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl fmt::Debug for MidjourneyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MidjourneyClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("strict_status", &self.strict_status)
            .finish()
    }
}
