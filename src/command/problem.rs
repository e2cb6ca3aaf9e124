extern crate termcolor;

use crate::{
    read::parse_arg,
    write::{write_cases, write_coverage},
    Event, Events,
};
use code_practice::{
    bank::{Problem, ProblemBank},
    error::Result,
    practice::{FetchOutcome, FetchTarget, FetchTicket, Practice},
    random::entropy_rng,
    types::Difficulty,
};
use log::debug;
use std::{io::Write, sync::Arc};
use termcolor::{Color, StandardStream};

fn spawn_fetch(bank: &Arc<dyn ProblemBank>, events: &Events, ticket: FetchTicket) {
    let bank = Arc::clone(bank);
    let events = events.clone();
    tokio::spawn(async move {
        let result = ticket.fetch(&*bank, &mut entropy_rng()).await;
        if events.send(Event::Fetched(ticket, result)).is_err() {
            debug!("Event loop closed, dropping fetch result");
        }
    });
}

#[allow(unused_must_use)]
fn write_fetching(stdout: &mut StandardStream, ticket: &FetchTicket) {
    match ticket.target() {
        FetchTarget::Random { difficulty, batch } => write_progress!(
            stdout,
            "Fetching",
            "Random {} problem from {} listed",
            difficulty,
            batch
        ),
        FetchTarget::Slug(slug) => write_progress!(stdout, "Fetching", "Problem {}", slug),
    }
}

pub fn next(
    stdout: &mut StandardStream,
    practice: &mut Practice,
    bank: &Arc<dyn ProblemBank>,
    events: &Events,
) {
    let ticket = practice.begin_next();
    write_fetching(stdout, &ticket);
    spawn_fetch(bank, events, ticket);
}

pub fn open(
    stdout: &mut StandardStream,
    practice: &mut Practice,
    bank: &Arc<dyn ProblemBank>,
    events: &Events,
    slug: Option<&str>,
) {
    if let Some(slug) = parse_arg::<String>(stdout, "open", slug) {
        let ticket = practice.begin_open(&slug);
        write_fetching(stdout, &ticket);
        spawn_fetch(bank, events, ticket);
    }
}

#[allow(unused_must_use)]
pub fn fetched(
    stdout: &mut StandardStream,
    practice: &mut Practice,
    ticket: FetchTicket,
    result: Result<Problem>,
) {
    match practice.complete_fetch(ticket, result) {
        Ok(FetchOutcome::Loaded(coverage)) => {
            if let Some(p) = practice.problem() {
                write_ok!(stdout, "Loaded", "{}", p);
            }
            write_info!(
                stdout,
                "Info",
                "{} example cases, {} expected outputs",
                practice.cases().len(),
                practice.expected_outputs().len()
            );
            write_coverage(stdout, coverage);
        }
        Ok(FetchOutcome::Stale) => (),
        Err(e) => write_error!(stdout, "Error", "{}", e),
    }
}

#[allow(unused_must_use)]
pub fn difficulty(stdout: &mut StandardStream, practice: &mut Practice, arg: Option<&str>) {
    if let Some(d) = parse_arg::<Difficulty>(stdout, "difficulty", arg) {
        practice.set_difficulty(d);
        write_ok!(stdout, "Success", "Next problems will be {}", d);
    }
}

#[allow(unused_must_use)]
pub fn show(stdout: &mut StandardStream, practice: &Practice) {
    match (practice.problem(), practice.description()) {
        (Some(p), Some(description)) => {
            write_info!(stdout, "Problem", "{} ({})", p, p.slug);
            writeln!(stdout, "{}", description.trim());
        }
        _ => write_error!(stdout, "Error", "No problem loaded"),
    }
}

pub fn cases(stdout: &mut StandardStream, practice: &Practice) {
    write_cases(stdout, practice);
}

#[allow(unused_must_use)]
pub fn case(stdout: &mut StandardStream, practice: &mut Practice, arg: Option<&str>) {
    if let Some(n) = parse_arg::<usize>(stdout, "case", arg) {
        if n > 0 && practice.select_case(n - 1) {
            write_ok!(stdout, "Success", "Selected case {}", n);
        } else {
            write_error!(
                stdout,
                "Error",
                "case: {} out of range, expected 1 to {}",
                n,
                practice.cases().len()
            );
        }
    }
}

#[allow(unused_must_use)]
pub fn status(stdout: &mut StandardStream, practice: &Practice) {
    match practice.problem() {
        Some(p) => write_info!(stdout, "Problem", "{}", p),
        None => write_info!(stdout, "Problem", "none"),
    }
    write_info!(
        stdout,
        "Settings",
        "difficulty {}, language {}, driver {:?}",
        practice.difficulty(),
        practice.language(),
        practice.driver_mode()
    );
    if practice.is_loading() {
        write_progress!(stdout, "Pending", "Fetching a problem");
    }
    if practice.is_running() {
        write_progress!(stdout, "Pending", "Running code");
    }
}
