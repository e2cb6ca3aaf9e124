extern crate serde;

use crate::{
    error::{Error, Kind, Result},
    language::Language,
    types::Difficulty,
};
use serde::Deserialize;
use std::{collections::BTreeMap, fmt};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSummary {
    pub title: String,
    pub title_slug: String,
    pub difficulty: String,
    #[serde(default)]
    pub is_paid_only: bool,
}
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProblemList {
    #[serde(default)]
    pub(crate) problemset_question_list: Option<Vec<ProblemSummary>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    #[serde(default)]
    pub lang: String,
    pub lang_slug: String,
    pub code: String,
}
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetail {
    #[serde(default)]
    pub question_title: String,
    #[serde(default)]
    pub title_slug: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub example_testcases: Option<String>,
    #[serde(default)]
    pub code_snippets: Option<Vec<CodeSnippet>>,
}

/// A fetched problem. Replaced as a whole by the next fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub title: String,
    pub slug: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub example_testcases: String,
    starter: BTreeMap<Language, String>,
}
impl Problem {
    pub fn starter(&self, language: Language) -> Option<&str> {
        self.starter.get(&language).map(String::as_str)
    }
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.starter.keys().copied()
    }
    pub fn from_detail(detail: ProblemDetail) -> Result<Self> {
        let difficulty = detail.difficulty.parse::<Difficulty>().map_err(|e| {
            Error::with_description(Kind::Malformed, format!("{} for {}", e, detail.title_slug))
        })?;
        let mut starter = BTreeMap::new();
        for snippet in detail.code_snippets.unwrap_or_default() {
            let language = match Language::from_supplier_slug(&snippet.lang_slug) {
                Some(l) => l,
                None => continue,
            };
            if snippet.lang_slug == language.supplier_slug() {
                starter.insert(language, snippet.code);
            } else {
                starter.entry(language).or_insert(snippet.code);
            }
        }
        Ok(Problem {
            title: detail.question_title,
            slug: detail.title_slug,
            difficulty,
            description: detail.question.unwrap_or_default(),
            example_testcases: detail.example_testcases.unwrap_or_default(),
            starter,
        })
    }
}
impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.difficulty)
    }
}
