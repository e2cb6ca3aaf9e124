extern crate reqwest;
extern crate serde;
extern crate serde_json;

use super::{response::ExecuteResponse, Compiler, Submission};
use crate::{
    error::{decode_error, network_error, Result},
    http,
    settings::Credentials,
    types::ExecutionResult,
};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExecuteRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    script: &'a str,
    language: &'a str,
    version_index: &'a str,
    stdin: &'a str,
}

/// JDoodle compiler API.
pub struct JDoodle {
    client: Client,
    url: String,
    credentials: Credentials,
}
impl JDoodle {
    pub fn new(base: &str, credentials: Credentials, timeout: Option<Duration>) -> Result<Self> {
        Ok(Self::with_client(http::client(timeout)?, base, credentials))
    }
    pub fn with_client(client: Client, base: &str, credentials: Credentials) -> Self {
        JDoodle {
            client,
            url: format!("{}/execute", base.trim_end_matches('/')),
            credentials,
        }
    }
}

#[async_trait]
impl Compiler for JDoodle {
    async fn execute(&self, submission: &Submission) -> Result<ExecutionResult> {
        debug!(
            "POST {} language={} stdin={} bytes",
            self.url,
            submission.language.id(),
            submission.stdin.len()
        );
        let response = self
            .client
            .post(&self.url)
            .json(&ExecuteRequest {
                client_id: &self.credentials.client_id,
                client_secret: &self.credentials.client_secret,
                script: &submission.script,
                language: submission.language.id(),
                version_index: submission.language.version_index(),
                stdin: &submission.stdin,
            })
            .send()
            .await
            .map_err(network_error)?;
        let status = response.error_for_status_ref().map(|_| ());
        let body = response.text().await.map_err(network_error)?;
        match serde_json::from_str::<ExecuteResponse>(&body) {
            Ok(v) => {
                debug!(
                    "statusCode={} cpuTime={:?} memory={:?}",
                    v.status_code, v.cpu_time, v.memory
                );
                Ok(v.into_result())
            }
            Err(e) => {
                status.map_err(network_error)?;
                Err(decode_error(e))
            }
        }
    }
}
