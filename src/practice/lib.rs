pub mod bank;
pub mod compiler;
pub(crate) mod config;
pub mod driver;
pub mod error;
pub(crate) mod http;
pub mod language;
pub mod parser;
pub mod practice;
pub mod random;
pub mod settings;
pub mod types;

pub use error::{Error, Kind, Result};
pub use practice::Practice;
