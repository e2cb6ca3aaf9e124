extern crate handlebars;

use handlebars::{RenderError, TemplateError};
use std::{error::Error as StdError, fmt, result::Result as StdResult};

#[derive(Debug)]
pub enum Error {
    Template(&'static str, TemplateError),
    Render(&'static str, RenderError),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Template(name, err) => write!(f, "Error parsing {} template: {}", name, err),
            Error::Render(name, err) => write!(f, "Error generating {} driver: {}", name, err),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Template(_, err) => Some(err),
            Error::Render(_, err) => Some(err),
        }
    }
}

pub type Result<T> = StdResult<T, Error>;
