extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use clap::{crate_description, crate_name, Arg, ArgMatches, Command};
use code_practice::{
    bank::{AlfaClient, Problem, ProblemBank},
    compiler::{Compiler, JDoodle},
    driver::DriverMode,
    error::{Error, Result},
    language::Language,
    practice::{FetchTicket, Practice, RunTicket},
    settings::Settings,
    types::{Difficulty, ExecutionResult},
};
use log::warn;
use pretty_env_logger::init_timed;
use std::{fs::File, io::Write, process, sync::Arc};
use termcolor::{Color, ColorChoice, StandardStream, WriteColor};
use tokio::{
    io::{stdin, AsyncBufReadExt, BufReader},
    sync::mpsc::{unbounded_channel, UnboundedSender},
};

#[macro_use]
mod color;
mod command {
    pub mod editor;
    pub mod problem;
}
mod read;
mod write;

use command::{editor, problem};
use read::prompt;

/// Completion of a request spawned by a command.
pub enum Event {
    Fetched(FetchTicket, Result<Problem>),
    Ran(RunTicket, Result<ExecutionResult>),
}
pub type Events = UnboundedSender<Event>;

const HELP: &str = r#"next              fetch a random problem of the selected difficulty
open <slug>       fetch a specific problem
difficulty <D>    select Easy, Medium or Hard
show              print the problem description
cases             list example cases and expected outputs
case <n>          select the case used as stdin
lang <L>          switch language, loading its starter code
languages         list languages
reset             restore the starter code
load <path>       replace the editor with a file
save <path>       write the editor to a file
code              print the editor
run               run the editor on the selected case
status            show session state
help              show this message
exit              quit"#;

fn load_settings(matches: &ArgMatches) -> Result<Settings> {
    let mut settings = match matches.value_of("config") {
        Some(path) => Settings::from_reader(File::open(path).map_err(Error::from)?)?,
        None => Settings::default(),
    };
    if let Some(id) = matches.value_of("client-id") {
        settings.credentials.client_id = id.to_string();
    }
    if let Some(secret) = matches.value_of("client-secret") {
        settings.credentials.client_secret = secret.to_string();
    }
    if let Some(d) = matches.value_of("difficulty") {
        // possible_values already restricts the input
        if let Ok(d) = d.parse::<Difficulty>() {
            settings.difficulty = d;
        }
    }
    if let Some(l) = matches.value_of("language") {
        if let Ok(l) = l.parse::<Language>() {
            settings.language = l;
        }
    }
    if matches.is_present("no-driver") {
        settings.driver = DriverMode::Off;
    }
    Ok(settings)
}

fn validate_language(value: &str) -> std::result::Result<(), String> {
    value.parse::<Language>().map(|_| ())
}

fn cli() -> Command<'static> {
    Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .help("Path to settings file"),
        )
        .arg(
            Arg::new("client-id")
                .long("client-id")
                .env("JDOODLE_CLIENT_ID")
                .takes_value(true)
                .help("Compiler API client id"),
        )
        .arg(
            Arg::new("client-secret")
                .long("client-secret")
                .env("JDOODLE_CLIENT_SECRET")
                .hide_env_values(true)
                .takes_value(true)
                .help("Compiler API client secret"),
        )
        .arg(
            Arg::new("difficulty")
                .short('d')
                .long("difficulty")
                .takes_value(true)
                .possible_values(["Easy", "Medium", "Hard"])
                .ignore_case(true)
                .help("Initial difficulty"),
        )
        .arg(
            Arg::new("language")
                .short('l')
                .long("language")
                .takes_value(true)
                .validator(validate_language)
                .help("Initial language"),
        )
        .arg(
            Arg::new("no-driver")
                .long("no-driver")
                .help("Never append an entry point to Python classes"),
        )
}

#[allow(unused_must_use)]
fn fatal(stdout: &mut StandardStream, what: &str, err: Error) -> ! {
    write_error!(stdout, "Error", "{}: {}", what, err);
    stdout.reset();
    process::exit(1)
}

/// Runs one command line. Returns false on `exit`.
#[allow(unused_must_use)]
fn dispatch(
    stdout: &mut StandardStream,
    practice: &mut Practice,
    bank: &Arc<dyn ProblemBank>,
    compiler: &Arc<dyn Compiler>,
    events: &Events,
    line: &str,
) -> bool {
    let mut words = line.splitn(2, char::is_whitespace);
    let command = words.next().unwrap_or_default();
    let arg = words.next().map(str::trim);
    match command {
        "" => (),
        "next" => problem::next(stdout, practice, bank, events),
        "open" => problem::open(stdout, practice, bank, events, arg),
        "difficulty" => problem::difficulty(stdout, practice, arg),
        "show" => problem::show(stdout, practice),
        "cases" => problem::cases(stdout, practice),
        "case" => problem::case(stdout, practice, arg),
        "status" => problem::status(stdout, practice),
        "lang" => editor::language(stdout, practice, arg),
        "languages" => editor::languages(stdout, practice),
        "reset" => editor::reset(stdout, practice),
        "load" => editor::load(stdout, practice, arg),
        "save" => editor::save(stdout, practice, arg),
        "code" => editor::code(stdout, practice),
        "run" => editor::run(stdout, practice, compiler, events),
        "help" => {
            writeln!(stdout, "{}", HELP);
        }
        "exit" => return false,
        unknown => write_error!(
            stdout,
            "Error",
            r#"code-practice: unknown command "{}""#,
            unknown
        ),
    }
    true
}

#[allow(unused_must_use)]
#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let matches = cli().get_matches();

    let settings = match load_settings(&matches) {
        Ok(v) => v,
        Err(e) => fatal(&mut stdout, "Error load settings", e),
    };
    if settings.credentials.is_incomplete() {
        warn!("Compiler credentials are not set");
        write_warn!(
            &mut stdout,
            "Warning",
            "No compiler credentials, set JDOODLE_CLIENT_ID and JDOODLE_CLIENT_SECRET to run code"
        );
    }
    let bank: Arc<dyn ProblemBank> =
        match AlfaClient::new(&settings.problem_bank, settings.timeout()) {
            Ok(v) => Arc::new(v),
            Err(e) => fatal(&mut stdout, "Problem bank", e),
        };
    let compiler: Arc<dyn Compiler> = match JDoodle::new(
        &settings.compiler,
        settings.credentials.clone(),
        settings.timeout(),
    ) {
        Ok(v) => Arc::new(v),
        Err(e) => fatal(&mut stdout, "Compiler", e),
    };
    let mut practice = match Practice::new(&settings) {
        Ok(v) => v,
        Err(e) => fatal(&mut stdout, "Session", e),
    };

    let (events, mut received) = unbounded_channel();
    let mut lines = BufReader::new(stdin()).lines();
    write_info!(&mut stdout, "Info", r#"Type "help" for a list of commands"#);
    problem::next(&mut stdout, &mut practice, &bank, &events);
    loop {
        prompt(&mut stdout, &practice);
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if !dispatch(&mut stdout, &mut practice, &bank, &compiler, &events, line.trim()) {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => write_error!(&mut stdout, "Error", "Read: {}", e),
            },
            Some(event) = received.recv() => {
                writeln!(&mut stdout);
                match event {
                    Event::Fetched(ticket, result) => {
                        problem::fetched(&mut stdout, &mut practice, ticket, result)
                    }
                    Event::Ran(ticket, result) => {
                        editor::ran(&mut stdout, &mut practice, ticket, result)
                    }
                }
            }
        }
        stdout.reset();
    }
    stdout.reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use code_practice::{
        bank::{ProblemDetail, ProblemSummary},
        error::Kind,
        practice::FetchTarget,
    };
    use termcolor::ColorChoice;

    struct EmptyBank;
    #[async_trait]
    impl ProblemBank for EmptyBank {
        async fn list(&self, _limit: usize) -> Result<Vec<ProblemSummary>> {
            Ok(Vec::new())
        }
        async fn detail(&self, slug: &str) -> Result<ProblemDetail> {
            Err(Error::with_description(Kind::Malformed, slug.to_string()))
        }
    }

    #[test]
    fn command_line_overrides_defaults() {
        let matches = cli().get_matches_from([
            "code-practice",
            "--difficulty",
            "hard",
            "--language",
            "java",
            "--no-driver",
        ]);
        let settings = load_settings(&matches).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.language, Language::Java);
        assert_eq!(settings.driver, DriverMode::Off);
    }

    #[tokio::test]
    async fn startup_fetch_uses_selected_difficulty() {
        let matches = cli().get_matches_from(["code-practice", "-d", "Medium"]);
        let mut practice = Practice::new(&load_settings(&matches).unwrap()).unwrap();
        let bank: Arc<dyn ProblemBank> = Arc::new(EmptyBank);
        let (events, mut received) = unbounded_channel();
        let mut stdout = StandardStream::stdout(ColorChoice::Never);

        problem::next(&mut stdout, &mut practice, &bank, &events);
        assert!(practice.is_loading());
        match received.recv().await {
            Some(Event::Fetched(ticket, result)) => {
                assert!(matches!(
                    ticket.target(),
                    FetchTarget::Random {
                        difficulty: Difficulty::Medium,
                        ..
                    }
                ));
                let err = practice.complete_fetch(ticket, result).unwrap_err();
                assert!(matches!(err.kind(), Kind::NoProblems(Difficulty::Medium)));
            }
            _ => panic!("no fetch was started"),
        }
    }
}
