//! ListenBrainz HTTP client
//!
//! Handles communication with the ListenBrainz web service.
//! See: https://listenbrainz.readthedocs.io/en/latest/users/api/
//!
//! All requests carry the user token in an `Authorization: Token ...` header
//! and a User-Agent identifying the application.

use std::collections::HashMap;
use std::future::Future;

use super::{adapter, dto};
use crate::brainz::domain::{
    ListenRecord, StatsPeriod, TagBundle, TokenValidation, UpstreamError,
};

/// Listens endpoint page size. The service caps pages well below the listen
/// counts we aggregate, so fetch_listens pages with `max_ts` cursors.
const PAGE_SIZE: u32 = 100;

/// User agent string - identify ourselves to the API
const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/brainzcloud/brainzcloud)"
);

/// ListenBrainz API client
#[derive(Clone)]
pub struct ListenBrainzClient {
    token: String,
    http_client: reqwest::Client,
    base_url: String,
}

impl ListenBrainzClient {
    /// Create a new client with the given user token.
    ///
    /// The client accepts gzip-compressed responses and sends a User-Agent
    /// header identifying the application.
    pub fn new(token: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            token: token.into(),
            http_client,
            base_url: "https://api.listenbrainz.org".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch up to `max_count` recent listens for `username`.
    ///
    /// Pages through the listens endpoint using the oldest timestamp of each
    /// page as the `max_ts` cursor for the next one. Stops early when the
    /// history is exhausted. Any page failure aborts the whole fetch.
    pub async fn fetch_listens(
        &self,
        username: &str,
        max_count: u32,
    ) -> Result<Vec<ListenRecord>, UpstreamError> {
        paginate_listens(max_count, |count, max_ts| {
            let mut url = format!(
                "{}/1/user/{}/listens?count={}",
                self.base_url,
                urlencoding::encode(username),
                count
            );
            if let Some(ts) = max_ts {
                url.push_str(&format!("&max_ts={ts}"));
            }
            async move { Ok(adapter::to_listen_records(self.get_listens_page(&url).await?)) }
        })
        .await
    }

    /// What the user is playing right now, if anything.
    pub async fn playing_now(&self, username: &str) -> Result<Option<ListenRecord>, UpstreamError> {
        let url = format!(
            "{}/1/user/{}/playing-now",
            self.base_url,
            urlencoding::encode(username)
        );
        let page = adapter::to_listen_records(self.get_listens_page(&url).await?);
        Ok(page.into_iter().next())
    }

    /// The user's most recent listen, if any.
    pub async fn most_recent_listen(
        &self,
        username: &str,
    ) -> Result<Option<ListenRecord>, UpstreamError> {
        let mut listens = self.fetch_listens(username, 1).await?;
        Ok(listens.pop())
    }

    /// Total number of listens the account has submitted.
    pub async fn listen_count(&self, username: &str) -> Result<u64, UpstreamError> {
        let url = format!(
            "{}/1/user/{}/listen-count",
            self.base_url,
            urlencoding::encode(username)
        );

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Token {}", self.token))
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        let response = check_status(response).await?;

        let count = response
            .json::<dto::ListenCountResponse>()
            .await
            .map_err(|e| UpstreamError::Parse(e.to_string()))?;

        Ok(adapter::to_listen_count(count))
    }

    /// Batch-fetch artist, recording, and release-group tags for the given
    /// recording MBIDs.
    ///
    /// Issues a single POST regardless of list length. An empty list returns
    /// an empty map without touching the network.
    pub async fn fetch_recording_tags(
        &self,
        mbids: &[String],
    ) -> Result<HashMap<String, TagBundle>, UpstreamError> {
        if mbids.is_empty() {
            return Ok(HashMap::new());
        }

        let url = format!("{}/1/metadata/recording/", self.base_url);
        let body = serde_json::json!({
            "recording_mbids": mbids,
            "inc": "tag",
        });

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Token {}", self.token))
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        let response = check_status(response).await?;

        let by_mbid = response
            .json::<HashMap<String, dto::RecordingMetadata>>()
            .await
            .map_err(|e| UpstreamError::Parse(e.to_string()))?;

        tracing::debug!(
            requested = mbids.len(),
            returned = by_mbid.len(),
            "Fetched recording tags"
        );

        Ok(adapter::to_tag_bundles(by_mbid))
    }

    /// Validate the client's user token.
    pub async fn validate_token(&self) -> Result<TokenValidation, UpstreamError> {
        let url = format!("{}/1/validate-token", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Token {}", self.token))
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        let response = check_status(response).await?;

        let validation = response
            .json::<dto::ValidateTokenResponse>()
            .await
            .map_err(|e| UpstreamError::Parse(e.to_string()))?;

        Ok(adapter::to_token_validation(validation))
    }

    /// Download grid-stats chart art as SVG text.
    pub async fn fetch_grid_stats_art(
        &self,
        username: &str,
        period: StatsPeriod,
        dimension: u8,
    ) -> Result<String, UpstreamError> {
        let url = format!(
            "{}/1/art/grid-stats/{}/{}/{}/0/1024",
            self.base_url,
            urlencoding::encode(username),
            period.as_str(),
            dimension
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        let response = check_status(response).await?;

        response
            .text()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))
    }

    /// Fetch and parse one listens-shaped page.
    async fn get_listens_page(&self, url: &str) -> Result<dto::ListensResponse, UpstreamError> {
        let response = self
            .http_client
            .get(url)
            .header("Authorization", format!("Token {}", self.token))
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        let response = check_status(response).await?;

        response
            .json::<dto::ListensResponse>()
            .await
            .map_err(|e| UpstreamError::Parse(e.to_string()))
    }
}

/// Accumulate listens from a page source until `max_count` is reached or the
/// history runs out.
///
/// `fetch_page` is called with the page size to request and the `max_ts`
/// cursor (None for the first page); the oldest timestamp of each page
/// becomes the next cursor. Stops on an empty or short page, or when a page
/// carries no timestamps to advance the cursor with. Any page failure aborts
/// the whole fetch. The result never exceeds `max_count` records.
async fn paginate_listens<F, Fut>(
    max_count: u32,
    mut fetch_page: F,
) -> Result<Vec<ListenRecord>, UpstreamError>
where
    F: FnMut(u32, Option<i64>) -> Fut,
    Fut: Future<Output = Result<Vec<ListenRecord>, UpstreamError>>,
{
    let mut records: Vec<ListenRecord> = Vec::new();
    let mut max_ts: Option<i64> = None;

    while (records.len() as u32) < max_count {
        let count = PAGE_SIZE.min(max_count - records.len() as u32);
        let page = fetch_page(count, max_ts).await?;
        if page.is_empty() {
            break;
        }

        // The oldest listen in this page becomes the cursor for the next
        let oldest = page.iter().filter_map(|l| l.listened_at).min();
        let fetched = page.len() as u32;
        records.extend(page);

        tracing::debug!(fetched, total = records.len(), "Fetched listens page");

        if fetched < count {
            break;
        }
        match oldest {
            Some(ts) => max_ts = Some(ts),
            // Without timestamps we cannot advance the cursor
            None => break,
        }
    }

    records.truncate(max_count as usize);
    Ok(records)
}

/// Map non-success statuses to upstream errors, reading the API's error body
/// when one is present.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, UpstreamError> {
    let status = response.status();

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(UpstreamError::RateLimited);
    }

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(UpstreamError::NotFound);
    }

    if !status.is_success() {
        if let Ok(error) = response.json::<dto::ApiError>().await {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message: error.error,
            });
        }
        return Err(UpstreamError::Status {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    Ok(response)
}
