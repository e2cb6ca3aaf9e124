pub mod client;
pub mod response;

pub use client::JDoodle;
pub use response::ExecuteResponse;

use crate::{error::Result, language::Language, types::ExecutionResult};
use async_trait::async_trait;

/// A script ready to send, with the stdin of the selected case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub script: String,
    pub language: Language,
    pub stdin: String,
}

#[async_trait]
pub trait Compiler: Send + Sync {
    /// Runs once. Service-side failures come back as
    /// `ExecutionResult::Failure`; `Err` means the call itself failed.
    async fn execute(&self, submission: &Submission) -> Result<ExecutionResult>;
}
