pub mod client;
pub mod problem;

pub use client::AlfaClient;
pub use problem::{CodeSnippet, Problem, ProblemDetail, ProblemSummary};

use crate::{
    error::{Error, Kind, Result},
    random::choose_with,
    types::Difficulty,
};
use async_trait::async_trait;
use log::{debug, info};
use rand::Rng;

/// Source of problems: a listing endpoint and a per-slug detail endpoint.
#[async_trait]
pub trait ProblemBank: Send + Sync {
    async fn list(&self, limit: usize) -> Result<Vec<ProblemSummary>>;
    async fn detail(&self, slug: &str) -> Result<ProblemDetail>;
}

pub async fn fetch_problem<B>(bank: &B, slug: &str) -> Result<Problem>
where
    B: ProblemBank + ?Sized,
{
    let problem = Problem::from_detail(bank.detail(slug).await?)?;
    info!("Loaded problem {} ({})", problem.slug, problem.difficulty);
    Ok(problem)
}

/// Picks a problem of `difficulty` uniformly from one listing batch.
/// Paid-only problems are skipped: their details carry no snippets.
pub async fn fetch_random_problem<B, R>(
    bank: &B,
    difficulty: Difficulty,
    batch: usize,
    rng: &mut R,
) -> Result<Problem>
where
    B: ProblemBank + ?Sized,
    R: Rng + ?Sized,
{
    let candidates: Vec<ProblemSummary> = bank
        .list(batch)
        .await?
        .into_iter()
        .filter(|p| !p.is_paid_only && p.difficulty == difficulty.as_str())
        .collect();
    debug!("{} {} problems in batch", candidates.len(), difficulty);
    let slug = choose_with(&candidates, rng)
        .ok_or_else(|| Error::with_kind(Kind::NoProblems(difficulty)))?
        .title_slug
        .clone();
    fetch_problem(bank, &slug).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::sync::Mutex;

    struct Listing {
        summaries: Vec<(&'static str, &'static str)>,
        paid: Vec<&'static str>,
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ProblemBank for Listing {
        async fn list(&self, limit: usize) -> Result<Vec<ProblemSummary>> {
            self.requested.lock().unwrap().push(format!("list {}", limit));
            Ok(self
                .summaries
                .iter()
                .map(|(slug, difficulty)| ProblemSummary {
                    title: slug.to_string(),
                    title_slug: slug.to_string(),
                    difficulty: difficulty.to_string(),
                    is_paid_only: self.paid.contains(slug),
                })
                .collect())
        }
        async fn detail(&self, slug: &str) -> Result<ProblemDetail> {
            self.requested.lock().unwrap().push(format!("detail {}", slug));
            let difficulty = self
                .summaries
                .iter()
                .find(|(s, _)| *s == slug)
                .map_or("Easy", |(_, d)| *d);
            Ok(serde_json::from_value(serde_json::json!({
                "questionTitle": slug,
                "titleSlug": slug,
                "difficulty": difficulty,
            }))
            .unwrap())
        }
    }

    fn listing(summaries: Vec<(&'static str, &'static str)>) -> Listing {
        Listing {
            summaries,
            paid: Vec::new(),
            requested: Mutex::new(Vec::new()),
        }
    }

    #[tokio::test]
    async fn picks_only_matching_difficulty() {
        let bank = listing(vec![
            ("two-sum", "Easy"),
            ("lru-cache", "Medium"),
            ("median-of-two-sorted-arrays", "Hard"),
            ("3sum", "Medium"),
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..8 {
            let problem = fetch_random_problem(&bank, Difficulty::Medium, 100, &mut rng)
                .await
                .unwrap();
            assert_eq!(problem.difficulty, Difficulty::Medium);
            assert!(problem.slug == "lru-cache" || problem.slug == "3sum");
        }
        let requested = bank.requested.lock().unwrap();
        assert_eq!(requested[0], "list 100");
        assert!(requested[1].starts_with("detail "));
    }

    #[tokio::test]
    async fn empty_filter_reports_no_problems() {
        let bank = listing(vec![("two-sum", "Easy")]);
        let mut rng = StdRng::seed_from_u64(1);
        let err = fetch_random_problem(&bank, Difficulty::Hard, 50, &mut rng)
            .await
            .unwrap_err();
        assert!(matches!(err.kind(), Kind::NoProblems(Difficulty::Hard)));
        assert_eq!(bank.requested.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn paid_only_problems_are_never_picked() {
        let mut bank = listing(vec![("lru-cache", "Medium"), ("design-phone-directory", "Medium")]);
        bank.paid = vec!["design-phone-directory"];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..8 {
            let problem = fetch_random_problem(&bank, Difficulty::Medium, 100, &mut rng)
                .await
                .unwrap();
            assert_eq!(problem.slug, "lru-cache");
        }

        bank.summaries = vec![("design-phone-directory", "Medium")];
        let err = fetch_random_problem(&bank, Difficulty::Medium, 100, &mut rng)
            .await
            .unwrap_err();
        assert!(matches!(err.kind(), Kind::NoProblems(Difficulty::Medium)));
    }
}
