//! State of one practice session: the selected difficulty and language, the
//! current problem with its parsed cases, the editor buffer and the last run.
//!
//! Network calls are split in three steps so the caller can keep handling
//! input while a request is in flight: `begin_*` updates the state and
//! returns what to send, the caller awaits the request, and `complete_*`
//! applies the answer.
extern crate rand;

use crate::{
    bank::{fetch_problem, fetch_random_problem, Problem, ProblemBank},
    compiler::{Compiler, Submission},
    config::editor::UNSUPPORTED,
    driver::{Driver, DriverMode},
    error::{Error, Kind, Result},
    language::Language,
    parser::{parse_test_cases, Parser},
    random::entropy_rng,
    settings::Settings,
    types::{Difficulty, ExecutionResult, TestCase},
};
use log::{debug, error, info, warn};
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchTarget {
    Random { difficulty: Difficulty, batch: usize },
    Slug(String),
}

/// An outstanding fetch. Only the most recently issued ticket is applied.
#[derive(Debug)]
pub struct FetchTicket {
    generation: u64,
    target: FetchTarget,
}
impl FetchTicket {
    pub fn target(&self) -> &FetchTarget {
        &self.target
    }
    pub async fn fetch<B, R>(&self, bank: &B, rng: &mut R) -> Result<Problem>
    where
        B: ProblemBank + ?Sized,
        R: Rng + ?Sized,
    {
        match &self.target {
            FetchTarget::Random { difficulty, batch } => {
                fetch_random_problem(bank, *difficulty, *batch, rng).await
            }
            FetchTarget::Slug(slug) => fetch_problem(bank, slug).await,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    Available,
    Unsupported(Language),
    NoProblem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(Coverage),
    Stale,
}

/// An outstanding run, tied to the problem that was loaded when it started.
#[derive(Debug)]
pub struct RunTicket {
    generation: u64,
    submission: Submission,
}
impl RunTicket {
    pub fn submission(&self) -> &Submission {
        &self.submission
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome<'a> {
    Published(&'a ExecutionResult),
    /// A fetch started after the run; its result belongs to no current problem.
    Stale,
}
impl<'a> RunOutcome<'a> {
    pub fn published(self) -> Option<&'a ExecutionResult> {
        match self {
            RunOutcome::Published(v) => Some(v),
            RunOutcome::Stale => None,
        }
    }
}

pub fn placeholder(language: Language) -> String {
    format!("{} {}", language.comment(), UNSUPPORTED)
}

pub struct Practice {
    parser: Parser,
    driver: Driver,
    driver_mode: DriverMode,
    batch: usize,
    difficulty: Difficulty,
    language: Language,
    problem: Option<Problem>,
    cases: Vec<TestCase>,
    expected: Vec<String>,
    active_case: usize,
    script: String,
    output: Option<ExecutionResult>,
    generation: u64,
    loading: bool,
    running: bool,
}

impl Practice {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Practice {
            parser: Parser::new(),
            driver: Driver::new()?,
            driver_mode: settings.driver,
            batch: settings.batch_size,
            difficulty: settings.difficulty,
            language: settings.language,
            problem: None,
            cases: Vec::new(),
            expected: Vec::new(),
            active_case: 0,
            script: String::new(),
            output: None,
            generation: 0,
            loading: false,
            running: false,
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
    pub fn language(&self) -> Language {
        self.language
    }
    pub fn driver_mode(&self) -> DriverMode {
        self.driver_mode
    }
    pub fn problem(&self) -> Option<&Problem> {
        self.problem.as_ref()
    }
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }
    pub fn expected_outputs(&self) -> &[String] {
        &self.expected
    }
    pub fn active_case(&self) -> usize {
        self.active_case
    }
    pub fn active_input(&self) -> Option<&TestCase> {
        self.cases.get(self.active_case)
    }
    pub fn active_expected(&self) -> Option<&str> {
        self.expected.get(self.active_case).map(String::as_str)
    }
    pub fn script(&self) -> &str {
        &self.script
    }
    pub fn output(&self) -> Option<&ExecutionResult> {
        self.output.as_ref()
    }
    pub fn is_loading(&self) -> bool {
        self.loading
    }
    pub fn is_running(&self) -> bool {
        self.running
    }
    pub fn description(&self) -> Option<String> {
        self.problem
            .as_ref()
            .map(|p| self.parser.to_plain_text(&p.description))
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
    pub fn set_driver_mode(&mut self, mode: DriverMode) {
        self.driver_mode = mode;
    }
    pub fn set_script(&mut self, script: String) {
        self.script = script;
    }
    pub fn select_case(&mut self, index: usize) -> bool {
        if index < self.cases.len() {
            self.active_case = index;
            true
        } else {
            false
        }
    }

    fn load_starter(&mut self) -> Coverage {
        let problem = match &self.problem {
            Some(p) => p,
            None => {
                self.script.clear();
                return Coverage::NoProblem;
            }
        };
        match problem.starter(self.language) {
            Some(code) => {
                self.script = code.to_string();
                Coverage::Available
            }
            None => {
                debug!("{} has no {} starter", problem.slug, self.language);
                self.script = placeholder(self.language);
                Coverage::Unsupported(self.language)
            }
        }
    }

    /// Switches language, replacing the buffer with that language's starter.
    pub fn select_language(&mut self, language: Language) -> Coverage {
        self.language = language;
        self.output = None;
        self.load_starter()
    }
    pub fn reset_script(&mut self) -> Coverage {
        self.select_language(self.language)
    }

    fn begin_fetch(&mut self, target: FetchTarget) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.output = None;
        self.cases.clear();
        self.expected.clear();
        self.active_case = 0;
        FetchTicket {
            generation: self.generation,
            target,
        }
    }
    pub fn begin_next(&mut self) -> FetchTicket {
        let target = FetchTarget::Random {
            difficulty: self.difficulty,
            batch: self.batch,
        };
        self.begin_fetch(target)
    }
    pub fn begin_open(&mut self, slug: &str) -> FetchTicket {
        self.begin_fetch(FetchTarget::Slug(slug.to_string()))
    }

    /// Applies a finished fetch. Tickets superseded by a newer fetch are
    /// dropped without touching the state, whatever their result.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Problem>,
    ) -> Result<FetchOutcome> {
        if ticket.generation != self.generation {
            debug!(
                "Discarding stale fetch {} (current {})",
                ticket.generation, self.generation
            );
            return Ok(FetchOutcome::Stale);
        }
        self.loading = false;
        let problem = result.map_err(|e| {
            warn!("Failed to fetch problem: {}", e);
            e
        })?;
        let arg_count = problem
            .starter(Language::Python3)
            .map_or(1, |s| self.parser.infer_arg_count(s));
        self.cases = parse_test_cases(&problem.example_testcases, arg_count);
        self.expected = self.parser.parse_expected_outputs(&problem.description);
        self.active_case = 0;
        info!(
            "{}: {} cases of {} arguments, {} expected outputs",
            problem.slug,
            self.cases.len(),
            arg_count,
            self.expected.len()
        );
        self.problem = Some(problem);
        Ok(FetchOutcome::Loaded(self.load_starter()))
    }

    pub async fn next_problem<B>(&mut self, bank: &B) -> Result<FetchOutcome>
    where
        B: ProblemBank + ?Sized,
    {
        let ticket = self.begin_next();
        let result = ticket.fetch(bank, &mut entropy_rng()).await;
        self.complete_fetch(ticket, result)
    }
    pub async fn open_problem<B>(&mut self, bank: &B, slug: &str) -> Result<FetchOutcome>
    where
        B: ProblemBank + ?Sized,
    {
        let ticket = self.begin_open(slug);
        let result = ticket.fetch(bank, &mut entropy_rng()).await;
        self.complete_fetch(ticket, result)
    }

    /// Prepares the buffer for a run against the selected case.
    pub fn begin_run(&mut self) -> Result<RunTicket> {
        if self.running {
            return Err(Error::with_kind(Kind::Busy));
        }
        self.running = true;
        self.output = None;
        let script = match self.driver_mode {
            DriverMode::Auto => self.driver.prepare(&self.script, self.language).into_owned(),
            DriverMode::Off => self.script.clone(),
        };
        Ok(RunTicket {
            generation: self.generation,
            submission: Submission {
                script,
                language: self.language,
                stdin: self.active_input().map(TestCase::stdin).unwrap_or_default(),
            },
        })
    }
    /// Applies a finished run. A run that outlived its problem clears the
    /// busy flag but publishes nothing.
    pub fn complete_run(
        &mut self,
        ticket: RunTicket,
        result: Result<ExecutionResult>,
    ) -> RunOutcome<'_> {
        self.running = false;
        let result = result.unwrap_or_else(|e| {
            error!("Execution error: {}", e);
            ExecutionResult::Failure {
                message: e.to_string(),
            }
        });
        if ticket.generation != self.generation {
            debug!(
                "Discarding run from fetch {} (current {})",
                ticket.generation, self.generation
            );
            return RunOutcome::Stale;
        }
        RunOutcome::Published(self.output.insert(result))
    }

    pub async fn run<C>(&mut self, compiler: &C) -> Result<RunOutcome<'_>>
    where
        C: Compiler + ?Sized,
    {
        let ticket = self.begin_run()?;
        let result = compiler.execute(ticket.submission()).await;
        Ok(self.complete_run(ticket, result))
    }
}
