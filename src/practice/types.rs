extern crate serde;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}
impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
    pub fn all() -> &'static [Difficulty] {
        &[Self::Easy, Self::Medium, Self::Hard]
    }
}
impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}
impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown difficulty \"{}\"", s))
    }
}

/// One example case: the raw argument literals, in call order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestCase {
    pub args: Vec<String>,
}
impl TestCase {
    pub fn new(args: Vec<String>) -> Self {
        TestCase { args }
    }
    pub fn stdin(&self) -> String {
        self.args.join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    Success { output: String },
    Failure { message: String },
}
impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
    pub fn text(&self) -> &str {
        match self {
            Self::Success { output } => output,
            Self::Failure { message } => message,
        }
    }
    /// Loose comparison against an expected value: whitespace is ignored so
    /// `[0, 1]` printed by the runtime matches `[0,1]` from the description.
    /// Failures never match.
    pub fn matches(&self, expected: &str) -> bool {
        match self {
            Self::Success { output } => compact(output) == compact(expected),
            Self::Failure { .. } => false,
        }
    }
}

fn compact(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" Medium ".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert!("insane".parse::<Difficulty>().is_err());
    }

    #[test]
    fn stdin_joins_arguments_by_line() {
        let case = TestCase::new(vec!["[2,7,11,15]".to_string(), "9".to_string()]);
        assert_eq!(case.stdin(), "[2,7,11,15]\n9");
        assert_eq!(TestCase::default().stdin(), "");
    }

    #[test]
    fn only_successful_output_matches() {
        let ok = ExecutionResult::Success {
            output: "[0, 1]\n".to_string(),
        };
        assert!(ok.matches("[0, 1]"));
        assert!(ok.matches("[0,1]"));
        assert!(!ok.matches("[1,0]"));
        let failed = ExecutionResult::Failure {
            message: "[0, 1]".to_string(),
        };
        assert!(!failed.matches("[0, 1]"));
    }
}
