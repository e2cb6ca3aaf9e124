extern crate serde;
extern crate serde_json;

use crate::{config::editor::EXECUTION_FAILED, types::ExecutionResult};
use serde::Deserialize;
use serde_json::Value;

const SUCCESS: i64 = 200;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResponse {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status_code: i64,
    #[serde(default)]
    pub memory: Option<Value>,
    #[serde(default)]
    pub cpu_time: Option<Value>,
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|s| !s.is_empty())
}

impl ExecuteResponse {
    pub fn into_result(self) -> ExecutionResult {
        if self.status_code == SUCCESS {
            ExecutionResult::Success {
                output: self.output.unwrap_or_default(),
            }
        } else {
            let error = self.error;
            ExecutionResult::Failure {
                message: non_empty(self.output)
                    .or_else(|| non_empty(error))
                    .unwrap_or_else(|| EXECUTION_FAILED.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(body: &str) -> ExecutionResult {
        serde_json::from_str::<ExecuteResponse>(body)
            .unwrap()
            .into_result()
    }

    #[test]
    fn status_200_is_success_verbatim() {
        assert_eq!(
            classify(r#"{"output": "[0, 1]\n", "statusCode": 200, "memory": "7340", "cpuTime": "0.02"}"#),
            ExecutionResult::Success {
                output: "[0, 1]\n".to_string()
            }
        );
        assert_eq!(
            classify(r#"{"statusCode": 200}"#),
            ExecutionResult::Success {
                output: String::new()
            }
        );
    }

    #[test]
    fn other_status_carries_service_output() {
        assert_eq!(
            classify(r#"{"output": "Compilation error: invalid syntax", "statusCode": 400}"#),
            ExecutionResult::Failure {
                message: "Compilation error: invalid syntax".to_string()
            }
        );
    }

    #[test]
    fn failure_falls_back_to_error_then_default() {
        assert_eq!(
            classify(r#"{"error": "Unauthorized Request", "statusCode": 401}"#),
            ExecutionResult::Failure {
                message: "Unauthorized Request".to_string()
            }
        );
        assert_eq!(
            classify(r#"{"output": "", "statusCode": 500}"#),
            ExecutionResult::Failure {
                message: EXECUTION_FAILED.to_string()
            }
        );
        assert!(!classify("{}").is_success());
    }
}
