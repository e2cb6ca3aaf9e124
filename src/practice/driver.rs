//! Entry-point synthesis for class-style solutions.
//!
//! Detection is a regular-expression heuristic, not a parser: scripts it does
//! not recognise are returned untouched.
extern crate handlebars;
extern crate serde;

mod error;
mod python;

pub use error::{Error, Result};

use crate::language::Language;
use handlebars::Handlebars;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverMode {
    /// Wrap class-style solutions before every run.
    Auto,
    Off,
}
impl Default for DriverMode {
    fn default() -> Self {
        Self::Auto
    }
}

#[derive(Serialize)]
struct Target<'a> {
    class: &'a str,
    method: &'a str,
}

pub struct Driver {
    engine: Handlebars<'static>,
    python: python::RegexSet,
}
impl Driver {
    pub fn new() -> Result<Self> {
        let mut engine = Handlebars::new();
        engine.set_strict_mode(true);
        engine.register_escape_fn(handlebars::no_escape);
        engine
            .register_template_string(python::NAME, python::TEMPLATE)
            .map_err(|e| Error::Template(python::NAME, e))?;
        Ok(Driver {
            engine,
            python: python::RegexSet::new(),
        })
    }

    /// Whether `script` would be considered for wrapping at all.
    pub fn applies(&self, script: &str, language: Language) -> bool {
        language == Language::Python3 && self.python.has_class(script)
    }

    fn render(&self, script: &str) -> Result<Option<String>> {
        let (class, method) = match self.python.target(script) {
            Some(v) => v,
            None => return Ok(None),
        };
        debug!("Generating driver for {}.{}", class, method);
        let driver = self
            .engine
            .render(python::NAME, &Target { class, method })
            .map_err(|e| Error::Render(python::NAME, e))?;
        let mut ret = String::with_capacity(script.len() + driver.len() + 1);
        ret.push_str(script);
        if !script.ends_with('\n') {
            ret.push('\n');
        }
        ret.push_str(&driver);
        Ok(Some(ret))
    }

    /// Script to submit for `language`: the user's text, followed by a
    /// generated entry point when it is a Python class without one.
    pub fn prepare<'a>(&self, script: &'a str, language: Language) -> Cow<'a, str> {
        if !self.applies(script, language) {
            return Cow::Borrowed(script);
        }
        match self.render(script) {
            Ok(Some(v)) => Cow::Owned(v),
            Ok(None) => Cow::Borrowed(script),
            Err(e) => {
                warn!("{}", e);
                Cow::Borrowed(script)
            }
        }
    }
}
