extern crate termcolor;

use crate::{
    color::write_block,
    read::{parse_arg, read_script, write_script},
    write::{write_coverage, write_execution, write_result},
    Event, Events,
};
use code_practice::{
    compiler::Compiler,
    error::Result,
    language::Language,
    practice::{Practice, RunTicket},
    types::ExecutionResult,
};
use log::debug;
use std::{io::Write, sync::Arc};
use termcolor::{Color, StandardStream};

#[allow(unused_must_use)]
pub fn language(stdout: &mut StandardStream, practice: &mut Practice, arg: Option<&str>) {
    if let Some(lang) = parse_arg::<Language>(stdout, "lang", arg) {
        let coverage = practice.select_language(lang);
        write_ok!(stdout, "Success", "Switched to {}", lang);
        write_coverage(stdout, coverage);
    }
}

#[allow(unused_must_use)]
pub fn languages(stdout: &mut StandardStream, practice: &Practice) {
    for &lang in Language::all() {
        let starter = practice
            .problem()
            .map_or(false, |p| p.starter(lang).is_some());
        let marker = if lang == practice.language() { "*" } else { " " };
        writeln!(
            stdout,
            "{} {:<8} {:<12} {}",
            marker,
            lang.id(),
            lang.name(),
            if starter { "starter" } else { "" }
        );
    }
}

#[allow(unused_must_use)]
pub fn reset(stdout: &mut StandardStream, practice: &mut Practice) {
    let coverage = practice.reset_script();
    write_ok!(stdout, "Success", "Editor reset to {} starter", practice.language());
    write_coverage(stdout, coverage);
}

#[allow(unused_must_use)]
pub fn load(stdout: &mut StandardStream, practice: &mut Practice, path: Option<&str>) {
    if let Some(path) = parse_arg::<String>(stdout, "load", path) {
        match read_script(&path) {
            Ok(script) => {
                practice.set_script(script);
                write_ok!(stdout, "Success", "Loaded {}", path);
            }
            Err(e) => write_error!(stdout, "Error", "Error open {}: {}", path, e),
        }
    }
}

pub fn save(stdout: &mut StandardStream, practice: &Practice, path: Option<&str>) {
    if let Some(path) = parse_arg::<String>(stdout, "save", path) {
        write_result(
            stdout,
            write_script(&path, practice.script()),
            &format!("Written editor to {}", path),
        );
    }
}

pub fn code(stdout: &mut StandardStream, practice: &Practice) {
    write_block(stdout, None, practice.script());
}

fn spawn_run(compiler: &Arc<dyn Compiler>, events: &Events, ticket: RunTicket) {
    let compiler = Arc::clone(compiler);
    let events = events.clone();
    tokio::spawn(async move {
        let result = compiler.execute(ticket.submission()).await;
        if events.send(Event::Ran(ticket, result)).is_err() {
            debug!("Event loop closed, dropping run result");
        }
    });
}

#[allow(unused_must_use)]
pub fn run(
    stdout: &mut StandardStream,
    practice: &mut Practice,
    compiler: &Arc<dyn Compiler>,
    events: &Events,
) {
    match practice.begin_run() {
        Ok(ticket) => {
            let language = ticket.submission().language;
            match practice.active_input() {
                Some(_) => write_progress!(
                    stdout,
                    "Running",
                    "{} on case {}",
                    language,
                    practice.active_case() + 1
                ),
                None => write_progress!(stdout, "Running", "{} without input", language),
            }
            spawn_run(compiler, events, ticket);
        }
        Err(e) => write_error!(stdout, "Error", "{}", e),
    }
}

#[allow(unused_must_use)]
pub fn ran(
    stdout: &mut StandardStream,
    practice: &mut Practice,
    ticket: RunTicket,
    result: Result<ExecutionResult>,
) {
    let published = practice.complete_run(ticket, result).published().cloned();
    match published {
        Some(result) => write_execution(stdout, &result, practice.active_expected()),
        None => write_info!(
            stdout,
            "Info",
            "Dropped output of a run started on the previous problem"
        ),
    }
}
