//! Best-effort extraction of test cases and expected outputs from the
//! problem bank's semi-structured text. Nothing here fails: unrecognised
//! input degrades to defaults or empty results.
mod arity;
mod cases;
mod markup;
mod outputs;

pub use cases::parse_test_cases;

pub struct Parser {
    arity: arity::RegexSet,
    markup: markup::RegexSet,
    outputs: outputs::RegexSet,
}
impl Parser {
    pub fn new() -> Self {
        Self {
            arity: arity::RegexSet::new(),
            markup: markup::RegexSet::new(),
            outputs: outputs::RegexSet::new(),
        }
    }
}
impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
