extern crate reqwest;
extern crate serde_json;
extern crate serde_yaml;

use crate::{driver, types::Difficulty};
use std::{boxed::Box, convert::Into, error::Error as StdError, fmt, io, result::Result as StdResult};

#[derive(Debug)]
pub struct Error(Box<Inner>);
#[derive(Debug)]
pub enum Kind {
    Builder(reqwest::Error),
    Network(reqwest::Error),
    Decode(serde_json::Error),
    Malformed,
    NoProblems(Difficulty),
    Busy,
    Settings(serde_yaml::Error),
    Io(io::Error),
    Driver(driver::Error),
}
#[derive(Debug)]
struct Inner {
    kind: Kind,
    description: Option<String>,
}

pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.kind {
            Kind::Builder(err) => write!(f, "Error building client: {}", err)?,
            Kind::Network(err) => write!(f, "Error sending request: {}", err)?,
            Kind::Decode(err) => write!(f, "Error decoding response: {}", err)?,
            Kind::Malformed => write!(f, "Malformed response")?,
            Kind::NoProblems(difficulty) => write!(
                f,
                "No {} problems found in current batch. Try again",
                difficulty
            )?,
            Kind::Busy => write!(f, "Another request is still running")?,
            Kind::Settings(err) => write!(f, "Error loading settings: {}", err)?,
            Kind::Io(err) => write!(f, "IO error: {}", err)?,
            Kind::Driver(err) => write!(f, "Driver: {}", err)?,
        }
        self.write_description(f)
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0.kind {
            Kind::Builder(x) | Kind::Network(x) => Some(x),
            Kind::Decode(x) => Some(x),
            Kind::Settings(x) => Some(x),
            Kind::Io(x) => Some(x),
            Kind::Driver(x) => Some(x),
            Kind::Malformed | Kind::NoProblems(_) | Kind::Busy => None,
        }
    }
}
impl Error {
    fn new(inner: Inner) -> Self {
        Self(Box::new(inner))
    }
    pub fn with_kind(kind: Kind) -> Self {
        Self::new(Inner {
            kind,
            description: None,
        })
    }
    pub fn with_description<T: Into<String>>(kind: Kind, description: T) -> Self {
        Self::new(Inner {
            kind,
            description: Some(description.into()),
        })
    }
    pub fn kind(&self) -> &Kind {
        &self.0.kind
    }
    fn write_description(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(d) = &self.0.description {
            write!(f, ": {}", d)
        } else {
            Ok(())
        }
    }
}

pub(crate) fn network_error(err: reqwest::Error) -> Error {
    Error::with_kind(Kind::Network(err))
}
pub(crate) fn decode_error(err: serde_json::Error) -> Error {
    Error::with_kind(Kind::Decode(err))
}
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::with_kind(Kind::Io(err))
    }
}
impl From<driver::Error> for Error {
    fn from(err: driver::Error) -> Self {
        Error::with_kind(Kind::Driver(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_problems_names_the_difficulty() {
        let err = Error::with_kind(Kind::NoProblems(Difficulty::Medium));
        assert_eq!(
            err.to_string(),
            "No Medium problems found in current batch. Try again"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn description_is_appended() {
        let err = Error::with_description(Kind::Malformed, "unknown difficulty \"Insane\"");
        assert_eq!(
            err.to_string(),
            "Malformed response: unknown difficulty \"Insane\""
        );
        assert!(matches!(err.kind(), Kind::Malformed));
    }
}
