pub mod endpoint {
    pub const PROBLEM_BANK: &str = "https://alfa-leetcode-api.onrender.com";
    pub const COMPILER: &str = "https://api.jdoodle.com/v1";
}
pub mod bank {
    pub const BATCH_SIZE: usize = 100;
}
pub mod client {
    use std::time::Duration;
    pub const TIMEOUT: Duration = Duration::from_secs(30);
    pub const USER_AGENT: &str = concat!("code-practice/", env!("CARGO_PKG_VERSION"));
}
pub mod editor {
    pub const UNSUPPORTED: &str = "Language not supported for this problem";
    pub const EXECUTION_FAILED: &str = "Execution failed";
}
