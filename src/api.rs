//! Client for the remote restaurant endpoints.
//!
//! Three read-only operations are exposed, all `GET` relative to the
//! configured base URL:
//!
//! - `restaurants` lists every restaurant
//! - `restaurants/{id}` fetches a single restaurant
//! - `restaurants/search?q={query}` searches by free text

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

use crate::config::ClientConfig;
use crate::data::Restaurant;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid restaurant id {0:?}")]
    InvalidId(String),
    #[error("invalid base url: {0}")]
    Url(#[from] url::ParseError),
    #[error("base url {0} can not carry a path")]
    BaseUrl(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Text fit for showing to a user.
    pub fn message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Anything able to answer the three restaurant queries.
#[async_trait]
pub trait RestaurantSource: Send + Sync + 'static {
    async fn list_restaurants(&self) -> ApiResult<Vec<Restaurant>>;

    async fn get_restaurant(&self, id: &str) -> ApiResult<Restaurant>;

    /// The query is forwarded untouched, the empty string included.
    async fn search_restaurants(&self, query: &str) -> ApiResult<Vec<Restaurant>>;
}

#[derive(Debug, Clone)]
pub struct RestaurantApi {
    http_client: HttpClient,
    base_url: Url,
}

impl RestaurantApi {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::BaseUrl(config.base_url.clone()));
        }

        let http_client = HttpClient::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // segments are appended after the base path, never replacing its last segment
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::BaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        tracing::debug!("GET {url}");
        let response = self.http_client.get(url).send().await?;
        handle_response(response).await
    }
}

#[async_trait]
impl RestaurantSource for RestaurantApi {
    async fn list_restaurants(&self) -> ApiResult<Vec<Restaurant>> {
        let url = self.endpoint(&["restaurants"])?;
        self.get(url).await
    }

    async fn get_restaurant(&self, id: &str) -> ApiResult<Restaurant> {
        if matches!(id, "" | "." | "..") {
            return Err(ApiError::InvalidId(id.to_string()));
        }
        let url = self.endpoint(&["restaurants", id])?;
        self.get(url).await
    }

    async fn search_restaurants(&self, query: &str) -> ApiResult<Vec<Restaurant>> {
        let mut url = self.endpoint(&["restaurants", "search"])?;
        url.query_pairs_mut().append_pair("q", query);
        self.get(url).await
    }
}

#[derive(Deserialize)]
struct ErrJsonResp {
    message: String,
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    let text = response.text().await?;

    if status.is_success() {
        serde_json::from_str(&text).map_err(ApiError::from)
    } else {
        Err(ApiError::Status {
            status,
            message: error_message(&text),
        })
    }
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrJsonResp>(body) {
        Ok(resp) => resp.message,
        Err(_) if body.trim().is_empty() => "no details given".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
