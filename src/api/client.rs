//! HTTP plumbing shared by every backend resource
//!
//! Bodies are JSON with camelCase fields. A non-2xx answer becomes
//! [`PlannerError::ApiStatus`] carrying the backend's `message` when it sends
//! one, or the raw body otherwise.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::Settings;
use crate::error::{PlannerError, PlannerResult};

/// Client for the planner's REST backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiClient {
    /// Create a client for `base_url`; a trailing slash is added if missing
    pub fn new(base_url: &str, token: Option<String>) -> PlannerResult<Self> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized)?;

        Ok(Self {
            http: Client::new(),
            base_url,
            token,
        })
    }

    pub fn from_settings(settings: &Settings) -> PlannerResult<Self> {
        Self::new(&settings.api_base_url, settings.api_token.clone())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a resource path relative to the base URL
    pub(crate) fn url(&self, path: &str) -> PlannerResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> PlannerResult<RequestBuilder> {
        let url = self.url(path)?;
        tracing::debug!(%method, %url, "backend request");

        let builder = self.http.request(method, url);
        Ok(match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> PlannerResult<T> {
        let response = self.request(Method::GET, path)?.send().await?;
        read_json(response).await
    }

    pub(crate) async fn get_json_query<T, Q>(&self, path: &str, query: &Q) -> PlannerResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.request(Method::GET, path)?.query(query).send().await?;
        read_json(response).await
    }

    pub(crate) async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> PlannerResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.request(method, path)?.json(body).send().await?;
        read_json(response).await
    }

    /// Send a JSON body and ignore the response body
    pub(crate) async fn send_json_empty<B>(&self, method: Method, path: &str, body: &B) -> PlannerResult<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self.request(method, path)?.json(body).send().await?;
        check_status(response).await.map(|_| ())
    }

    pub(crate) async fn delete(&self, path: &str) -> PlannerResult<()> {
        let response = self.request(Method::DELETE, path)?.send().await?;
        check_status(response).await.map(|_| ())
    }
}

async fn check_status(response: Response) -> PlannerResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.message)
        .unwrap_or(body);

    tracing::warn!(status = status.as_u16(), %message, "backend request failed");
    Err(PlannerError::ApiStatus {
        status: status.as_u16(),
        message,
    })
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> PlannerResult<T> {
    let response = check_status(response).await?;
    response
        .json()
        .await
        .map_err(|e| PlannerError::Api(format!("Invalid response body: {}", e)))
}
