//! HTTP client for the identity and recommendation collaborators

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::types::{ChatMessage, Profile, QuizQuestion, Video};

/// Response from GET /login
#[derive(Debug, Deserialize)]
struct LoginResponse {
    /// URL the front end must navigate to for authentication
    auth_url: String,
}

/// Response from the recommendation endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Recommendation {
    /// Next assistant turn
    pub reply: ChatMessage,
    /// Ranked video list, replacing any previous recommendations
    pub videos: Vec<Video>,
}

/// Response from POST /library
#[derive(Debug, Deserialize)]
pub struct LibraryAddResponse {
    /// Human-readable confirmation
    pub message: String,
    /// The stored video record
    pub video: Video,
}

/// Response from GET /library
#[derive(Debug, Deserialize)]
struct LibraryResponse {
    videos: Vec<Video>,
}

/// Response from GET /watch
#[derive(Debug, Deserialize)]
pub struct WatchDetails {
    /// Generated outline of the video, if analysis has finished
    #[serde(default)]
    pub outline: Option<String>,
    /// Quiz questions generated for the video
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
}

/// Structured error body sent by the collaborators on failure
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// HTTP client for the collaborator API
pub struct ApiClient {
    config: ApiConfig,
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from configuration
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            // Session credentials are cookie-based
            .cookie_store(config.with_credentials)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
            base_url,
        })
    }

    /// Fetch the authentication URL to navigate to
    ///
    /// The identity provider owns the redirect flow; the client's only job
    /// is to hand the URL to the front end.
    pub async fn login(&self) -> Result<String> {
        let url = format!("{}/login", self.base_url);
        let response = self.http_client.get(&url).send().await?;

        if response.status().is_success() {
            let body: LoginResponse = response.json().await?;
            Ok(body.auth_url)
        } else {
            Err(api_error(response).await)
        }
    }

    /// Request logout. Any 2xx is success; callers decide what a failure
    /// means for local state.
    pub async fn logout(&self) -> Result<()> {
        let url = format!("{}/logout", self.base_url);
        let response = self.http_client.get(&url).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(api_error(response).await)
        }
    }

    /// Fetch the current viewer's profile. Non-2xx means "no session".
    pub async fn profile(&self) -> Result<Profile> {
        let url = format!("{}/profile", self.base_url);
        let response = self.http_client.get(&url).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(api_error(response).await)
        }
    }

    /// Send the entire transcript and receive the next assistant reply
    /// plus the replacement video list.
    ///
    /// The concrete route comes from configuration; `/chat` and
    /// `/recommend_videos` name the same capability in different
    /// deployments.
    pub async fn recommend(&self, messages: &[ChatMessage]) -> Result<Recommendation> {
        let url = format!("{}{}", self.base_url, self.config.chat_route);

        let request_body = RecommendRequest { messages };
        let response = self
            .http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(api_error(response).await)
        }
    }

    /// Save a video to the viewer's library
    pub async fn add_to_library(&self, yt_link: &str) -> Result<LibraryAddResponse> {
        let url = format!("{}/library", self.base_url);

        let request_body = LibraryAddRequest { yt_link };
        let response = self
            .http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(api_error(response).await)
        }
    }

    /// List the viewer's saved videos
    pub async fn library(&self) -> Result<Vec<Video>> {
        let url = format!("{}/library", self.base_url);
        let response = self.http_client.get(&url).send().await?;

        if response.status().is_success() {
            let body: LibraryResponse = response.json().await?;
            Ok(body.videos)
        } else {
            Err(api_error(response).await)
        }
    }

    /// Remove a video from the viewer's library
    pub async fn remove_from_library(&self, video_id: &str) -> Result<()> {
        let url = format!("{}/library/{}", self.base_url, video_id);
        let response = self.http_client.delete(&url).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(api_error(response).await)
        }
    }

    /// Fetch the outline and quiz for a watched video
    pub async fn watch(&self, yt_link: &str) -> Result<WatchDetails> {
        let url = format!("{}/watch", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("yt_link", yt_link)])
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(api_error(response).await)
        }
    }
}

/// Request body for the recommendation endpoint
#[derive(Serialize)]
struct RecommendRequest<'a> {
    messages: &'a [ChatMessage],
}

/// Request body for POST /library
#[derive(Serialize)]
struct LibraryAddRequest<'a> {
    yt_link: &'a str,
}

/// Map a non-2xx response to [`Error::Api`].
///
/// The collaborators send structured `{"detail": "..."}` bodies; when the
/// body is not structured the raw text is used instead.
async fn api_error(response: reqwest::Response) -> Error {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.detail,
        Err(_) if !body.is_empty() => body,
        Err(_) => "no response body".to_string(),
    };

    Error::Api { status, message }
}
