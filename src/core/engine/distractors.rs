//! Plausible-but-wrong option generators. All of them draw from an injected
//! random source, accumulate into a set until 3 unique values exist, and
//! fail with `InsufficientDistractorPool` instead of spinning forever when
//! the pool cannot supply 3 candidates.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::EngineError;

/// Retry ceiling for the sampling loops. Generous for healthy pools, small
/// enough to fail fast when the pool is degenerate.
const MAX_ATTEMPTS: usize = 64;

/// 3 unique fake years within +-5 of the correct one, never the correct
/// year itself and never in the future.
pub fn year_distractors<R: Rng + ?Sized>(
    rng: &mut R,
    correct_year: i32,
    current_year: i32,
) -> Result<Vec<String>, EngineError> {
    let mut found: BTreeSet<i32> = BTreeSet::new();
    let mut attempts = 0;

    while found.len() < 3 {
        attempts += 1;
        if attempts > MAX_ATTEMPTS {
            return Err(EngineError::InsufficientDistractorPool("year"));
        }

        let offset = rng.gen_range(-5..=5);
        let fake_year = correct_year + offset;
        if offset != 0 && fake_year <= current_year {
            found.insert(fake_year);
        }
    }

    Ok(found.into_iter().map(|y| y.to_string()).collect())
}

/// 3 unique actor names sampled from the flattened global cast pool
/// (repetition in the pool weights prolific casts), excluding the correct
/// actor.
pub fn actor_distractors<R: Rng + ?Sized>(
    rng: &mut R,
    correct_actor: &str,
    pool: &[String],
) -> Result<Vec<String>, EngineError> {
    let mut found: BTreeSet<String> = BTreeSet::new();
    let mut attempts = 0;

    while found.len() < 3 {
        attempts += 1;
        if attempts > MAX_ATTEMPTS {
            return Err(EngineError::InsufficientDistractorPool("actor"));
        }

        let Some(candidate) = pool.choose(rng) else {
            return Err(EngineError::InsufficientDistractorPool("actor"));
        };
        if candidate != correct_actor {
            found.insert(candidate.clone());
        }
    }

    Ok(found.into_iter().collect())
}

/// 3 distinct other-movie titles, sampled without replacement. The
/// candidate list is deduplicated first so repeated titles in the input
/// cannot collide inside one options array.
pub fn title_distractors<R: Rng + ?Sized>(
    rng: &mut R,
    correct_title: &str,
    all_titles: &[String],
) -> Result<Vec<String>, EngineError> {
    let candidates: Vec<&String> = all_titles
        .iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter(|t| t.as_str() != correct_title)
        .collect();

    if candidates.len() < 3 {
        return Err(EngineError::InsufficientDistractorPool("title"));
    }

    Ok(candidates
        .choose_multiple(rng, 3)
        .map(|t| (*t).clone())
        .collect())
}
