//! The question generation engine. Consumes the fully-materialized
//! enriched movie list and produces a balanced, shuffled set of localized
//! multiple-choice questions. Single-threaded, in-memory, no suspension
//! points; all randomness comes from the injected `Rng`.

pub mod balance;
pub mod builders;
pub mod difficulty;
pub mod distractors;
pub mod locale;
pub mod redact;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{MovieRecord, Question};

#[derive(Error, Debug)]
pub enum EngineError {
    /// A distractor generator ran out of attempts before collecting 3
    /// unique wrong answers. Names the distractor kind ("year", "actor",
    /// "title").
    #[error("not enough unique {0} distractors available")]
    InsufficientDistractorPool(&'static str),
}

/// Actor questions need enough of a global pool to make sampling
/// meaningful; below this, every option set would look the same.
const MIN_ACTOR_POOL: usize = 10;

/// Global pools built once from the whole movie list and read-only for the
/// rest of the run.
struct Pools {
    /// All titles, used for plot-question distractors.
    titles: Vec<String>,
    /// All cast names flattened across movies, repetition intact so more
    /// prolific casts weigh more in sampling.
    actors: Vec<String>,
}

impl Pools {
    fn collect(movies: &[MovieRecord]) -> Self {
        let titles = movies.iter().map(|m| m.title.clone()).collect();
        let actors = movies
            .iter()
            .flat_map(|m| m.cast.iter().map(|c| c.name.clone()))
            .collect();
        Self { titles, actors }
    }
}

pub struct QuestionEngine {
    current_year: i32,
}

impl QuestionEngine {
    pub fn new(current_year: i32) -> Self {
        Self { current_year }
    }

    /// Run the full pipeline over the enriched list: per-movie builders,
    /// then bucket balancing, then a global shuffle.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        movies: &[MovieRecord],
    ) -> Vec<Question> {
        let pools = Pools::collect(movies);
        info!("Generating questions for {} movies", movies.len());

        let mut questions = Vec::new();
        for movie in movies {
            self.questions_for_movie(rng, movie, &pools, &mut questions);
        }

        let before_balance = questions.len();
        let mut questions = balance::ensure_minimum_per_bucket(questions, balance::MIN_BUCKET_SIZE);
        debug!(
            "Balancing added {} duplicate questions",
            questions.len() - before_balance
        );

        questions.shuffle(rng);
        questions
    }

    fn questions_for_movie<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        movie: &MovieRecord,
        pools: &Pools,
        out: &mut Vec<Question>,
    ) {
        let category = locale::category_for(&movie.genres);
        let year = movie.release_year().and_then(|y| y.parse::<i32>().ok());
        let base = difficulty::classify(year, movie.popularity);

        match builders::year_question(rng, movie, &category, base, self.current_year) {
            Ok(Some(q)) => out.push(q),
            Ok(None) => {}
            Err(e) => warn!("Skipping year question for '{}': {e}", movie.title),
        }

        match builders::plot_questions(rng, movie, &category, base, &pools.titles) {
            Ok(qs) => out.extend(qs),
            Err(e) => warn!("Skipping plot questions for '{}': {e}", movie.title),
        }

        // Pool-size precondition for the actor distractor sampler
        if !movie.cast.is_empty() && pools.actors.len() > MIN_ACTOR_POOL {
            match builders::actor_question(rng, movie, &category, base, &pools.actors) {
                Ok(Some(q)) => out.push(q),
                Ok(None) => {}
                Err(e) => warn!("Skipping actor question for '{}': {e}", movie.title),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CastMember;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn movie(id: u64, title: &str, cast_names: &[&str]) -> MovieRecord {
        MovieRecord {
            id,
            title: title.to_string(),
            release_date: Some("2010-07-15".to_string()),
            overview: format!(
                "{title} follows an unlikely hero across a long and winding \
                 journey that reshapes everyone involved before the finale."
            ),
            popularity: 25.0,
            vote_average: 7.2,
            genres: vec!["Drama".to_string()],
            cast: cast_names
                .iter()
                .enumerate()
                .map(|(i, name)| CastMember {
                    name: name.to_string(),
                    character: format!("Character {i}"),
                })
                .collect(),
        }
    }

    fn options_invariant_holds(q: &Question) -> bool {
        let unique: std::collections::BTreeSet<&String> = q.options.iter().collect();
        q.options.len() == 4
            && unique.len() == 4
            && q.options.iter().filter(|o| **o == q.correct_answer).count() == 1
    }

    #[test]
    fn small_actor_pool_suppresses_actor_questions() {
        // 5 movies, 10 pool entries total: the >10 precondition fails, so
        // no actor questions, while year and plot questions still appear.
        let movies = vec![
            movie(1, "Inception", &["A1", "A2", "A3", "A4", "A5", "A6"]),
            movie(2, "Heat", &["B1"]),
            movie(3, "Seven", &["C1"]),
            movie(4, "Jaws", &["D1"]),
            movie(5, "Alien", &["E1"]),
        ];

        let engine = QuestionEngine::new(2026);
        let mut rng = StdRng::seed_from_u64(11);
        let questions = engine.generate(&mut rng, &movies);

        assert!(!questions.is_empty());
        assert!(questions.iter().all(|q| !q.question.contains("ηθοποιός")));
        assert!(questions.iter().any(|q| q.question.contains("χρονιά")));
        assert!(questions
            .iter()
            .any(|q| q.correct_answer == "Inception" || q.correct_answer == "Heat"));
    }

    #[test]
    fn generated_questions_satisfy_option_invariants() {
        let movies: Vec<MovieRecord> = (0..8)
            .map(|i| {
                let a = format!("Actor {i}a");
                let b = format!("Actor {i}b");
                movie(i, &format!("Movie {i}"), &[a.as_str(), b.as_str()])
            })
            .collect();

        let engine = QuestionEngine::new(2026);
        let mut rng = StdRng::seed_from_u64(21);
        let questions = engine.generate(&mut rng, &movies);

        assert!(!questions.is_empty());
        for q in &questions {
            assert!(options_invariant_holds(q), "bad options in {:?}", q);
            assert!(matches!(
                q.difficulty,
                crate::models::Difficulty::Easy
                    | crate::models::Difficulty::Medium
                    | crate::models::Difficulty::Hard
            ));
            assert!(!q.category.is_empty());
        }
    }

    #[test]
    fn every_observed_bucket_reaches_the_minimum() {
        let movies: Vec<MovieRecord> = (0..6)
            .map(|i| {
                let a = format!("Actor {i}a");
                let b = format!("Actor {i}b");
                movie(i, &format!("Movie {i}"), &[a.as_str(), b.as_str()])
            })
            .collect();

        let engine = QuestionEngine::new(2026);
        let mut rng = StdRng::seed_from_u64(33);
        let questions = engine.generate(&mut rng, &movies);

        for (_, count) in balance::bucket_counts(&questions) {
            assert!(count >= balance::MIN_BUCKET_SIZE);
        }
    }
}
