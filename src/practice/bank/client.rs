extern crate reqwest;
extern crate serde;
extern crate serde_json;

use super::{
    problem::{ProblemDetail, ProblemList, ProblemSummary},
    ProblemBank,
};
use crate::{
    error::{decode_error, network_error, Result},
    http,
};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Problem bank served by alfa-leetcode-api.
pub struct AlfaClient {
    client: Client,
    base: String,
}
impl AlfaClient {
    pub fn new(base: &str, timeout: Option<Duration>) -> Result<Self> {
        Ok(Self::with_client(http::client(timeout)?, base))
    }
    pub fn with_client(client: Client, base: &str) -> Self {
        AlfaClient {
            client,
            base: base.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let body = request
            .send()
            .await
            .map_err(network_error)?
            .error_for_status()
            .map_err(network_error)?
            .text()
            .await
            .map_err(network_error)?;
        serde_json::from_str(&body).map_err(decode_error)
    }
}

#[async_trait]
impl ProblemBank for AlfaClient {
    async fn list(&self, limit: usize) -> Result<Vec<ProblemSummary>> {
        let url = format!("{}/problems", self.base);
        debug!("GET {} limit={}", url, limit);
        let list: ProblemList = self
            .get_json(self.client.get(&url).query(&[("limit", limit)]))
            .await?;
        Ok(list.problemset_question_list.unwrap_or_default())
    }
    async fn detail(&self, slug: &str) -> Result<ProblemDetail> {
        let url = format!("{}/select", self.base);
        debug!("GET {} titleSlug={}", url, slug);
        self.get_json(self.client.get(&url).query(&[("titleSlug", slug)]))
            .await
    }
}
