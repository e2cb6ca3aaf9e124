extern crate termcolor;

use code_practice::{error::Result, practice::Practice};
use std::{
    fmt::Display,
    fs::{self, File},
    io::{self, Write},
    str::FromStr,
};
use termcolor::{Color, StandardStream};

#[allow(unused_must_use)]
pub fn prompt(stdout: &mut StandardStream, practice: &Practice) {
    match practice.problem() {
        Some(p) => write!(stdout, "code-practice [{} {}]> ", p.slug, practice.language().id()),
        None => write!(stdout, "code-practice [{}]> ", practice.language().id()),
    };
    stdout.flush();
}

/// Parses the argument of `command`, reporting a missing or invalid value.
#[allow(unused_must_use)]
pub fn parse_arg<T>(stdout: &mut StandardStream, command: &str, arg: Option<&str>) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let arg = match arg {
        Some(v) if !v.is_empty() => v,
        _ => {
            write_error!(stdout, "Error", "{}: missing argument", command);
            return None;
        }
    };
    match arg.parse::<T>() {
        Ok(v) => Some(v),
        Err(e) => {
            write_error!(stdout, "Error", "{}: {}", command, e);
            None
        }
    }
}

pub fn read_script(path: &str) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}
pub fn write_script(path: &str, script: &str) -> io::Result<()> {
    File::create(path).and_then(|mut f: File| f.write_all(script.as_bytes()))
}
