extern crate serde;
extern crate serde_yaml;

use crate::{
    config::{bank::BATCH_SIZE, client::TIMEOUT, endpoint},
    driver::DriverMode,
    error::{Error, Kind, Result},
    language::Language,
    types::Difficulty,
};
use serde::{Deserialize, Serialize};
use std::{io::Read, time::Duration};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}
impl Credentials {
    /// Whether either half of the pair is missing.
    pub fn is_incomplete(&self) -> bool {
        self.client_id.is_empty() || self.client_secret.is_empty()
    }
}

fn default_problem_bank() -> String {
    endpoint::PROBLEM_BANK.to_string()
}
fn default_compiler() -> String {
    endpoint::COMPILER.to_string()
}
fn default_batch_size() -> usize {
    BATCH_SIZE
}
fn default_timeout_secs() -> u64 {
    TIMEOUT.as_secs()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(default = "default_problem_bank")]
    pub problem_bank: String,
    #[serde(default = "default_compiler")]
    pub compiler: String,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    pub credentials: Credentials,
    pub driver: DriverMode,
    pub difficulty: Difficulty,
    pub language: Language,
}
impl Default for Settings {
    fn default() -> Self {
        Settings {
            problem_bank: default_problem_bank(),
            compiler: default_compiler(),
            batch_size: default_batch_size(),
            timeout_secs: default_timeout_secs(),
            credentials: Credentials::default(),
            driver: DriverMode::default(),
            difficulty: Difficulty::default(),
            language: Language::default(),
        }
    }
}
impl Settings {
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        serde_yaml::from_reader(rdr).map_err(|e| Error::with_kind(Kind::Settings(e)))
    }
    /// Request deadline. `timeout_secs: 0` disables it.
    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}
