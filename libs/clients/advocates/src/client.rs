//! HTTP access to the advocates API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};
use crate::model::{Advocate, AdvocatePage, SeedResult};

/// Anything that can serve one page of search results.
///
/// The view state only depends on this, so it can be driven by the HTTP
/// client or by a fake in tests.
#[async_trait]
pub trait AdvocateSource: Send + Sync {
    async fn fetch_page(&self, term: &str, page: u64, page_size: u64)
    -> ClientResult<Vec<Advocate>>;
}

/// reqwest client for `GET /api/advocates` and `POST /api/seed`.
#[derive(Debug, Clone)]
pub struct AdvocatesClient {
    base_url: String,
    client: Client,
}

impl AdvocatesClient {
    /// `base_url` is the server root, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> ClientResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidUrl(base_url));
        }
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn search(
        &self,
        term: &str,
        page: u64,
        page_size: u64,
    ) -> ClientResult<Vec<Advocate>> {
        debug!(term, page, page_size, "Fetching advocates");

        let response = self
            .client
            .get(format!("{}/api/advocates", self.base_url))
            .query(&[
                ("search", term.to_string()),
                ("page", page.to_string()),
                ("pageSize", page_size.to_string()),
            ])
            .send()
            .await?;

        let page: AdvocatePage = decode(response).await?;
        Ok(page.data)
    }

    /// Returns only the rows inserted by this call.
    pub async fn seed(&self) -> ClientResult<Vec<Advocate>> {
        let response = self
            .client
            .post(format!("{}/api/seed", self.base_url))
            .send()
            .await?;

        let result: SeedResult = decode(response).await?;
        Ok(result.advocates)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, body = %body, "Advocates API returned an error");
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl AdvocateSource for AdvocatesClient {
    async fn fetch_page(
        &self,
        term: &str,
        page: u64,
        page_size: u64,
    ) -> ClientResult<Vec<Advocate>> {
        self.search(term, page, page_size).await
    }
}
