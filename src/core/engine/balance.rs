//! Bucket balancing post-process. A bucket is the set of questions sharing
//! one (category, difficulty) pair; downstream quiz clients expect every
//! observed bucket to offer at least `MIN_BUCKET_SIZE` questions.

use std::collections::HashMap;

use crate::models::{Difficulty, Question};

use super::locale;

pub const MIN_BUCKET_SIZE: usize = 10;

type BucketKey = (String, Difficulty);

fn bucket_key(q: &Question) -> BucketKey {
    (q.category.clone(), q.difficulty)
}

/// Count questions per (category, difficulty) bucket in one pass.
pub fn bucket_counts(questions: &[Question]) -> HashMap<BucketKey, usize> {
    let mut counts = HashMap::new();
    for q in questions {
        *counts.entry(bucket_key(q)).or_insert(0) += 1;
    }
    counts
}

/// Top up every short bucket to `minimum` by duplicating questions already
/// in it. Each duplicate keeps options/answer/category/difficulty and gets
/// the localized suffix appended once to its prompt, so duplicated items
/// never collide on exact text with their source.
///
/// Duplicate sources are drawn by walking the original list once, so the
/// earliest question of a short bucket donates all of its copies.
pub fn ensure_minimum_per_bucket(questions: Vec<Question>, minimum: usize) -> Vec<Question> {
    let mut counts = bucket_counts(&questions);

    let mut duplicates = Vec::new();
    for q in &questions {
        let have = counts.entry(bucket_key(q)).or_insert(0);
        if *have < minimum {
            let needed = minimum - *have;
            for _ in 0..needed {
                let mut duplicate = q.clone();
                duplicate.question.push_str(locale::DUPLICATE_SUFFIX);
                duplicates.push(duplicate);
            }
            *have += needed;
        }
    }

    let mut balanced = questions;
    balanced.extend(duplicates);
    balanced
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, category: &str, difficulty: Difficulty) -> Question {
        Question {
            question: text.to_string(),
            options: vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            correct_answer: "a".to_string(),
            category: category.to_string(),
            difficulty,
        }
    }

    #[test]
    fn short_bucket_is_topped_up_to_minimum() {
        let questions = vec![
            question("q1", "Δράμα", Difficulty::Easy),
            question("q2", "Δράμα", Difficulty::Easy),
            question("q3", "Δράμα", Difficulty::Easy),
        ];

        let balanced = ensure_minimum_per_bucket(questions, 10);
        assert_eq!(balanced.len(), 10);

        let duplicates: Vec<&Question> = balanced
            .iter()
            .filter(|q| q.question.ends_with(locale::DUPLICATE_SUFFIX))
            .collect();
        assert_eq!(duplicates.len(), 7);

        for dup in duplicates {
            // suffix appended exactly once
            assert_eq!(dup.question.matches(locale::DUPLICATE_SUFFIX).count(), 1);
            assert_eq!(dup.correct_answer, "a");
            assert_eq!(dup.category, "Δράμα");
            assert_eq!(dup.difficulty, Difficulty::Easy);
        }
    }

    #[test]
    fn full_buckets_are_left_alone() {
        let questions: Vec<Question> = (0..12)
            .map(|i| question(&format!("q{i}"), "Κωμωδία", Difficulty::Medium))
            .collect();

        let balanced = ensure_minimum_per_bucket(questions, 10);
        assert_eq!(balanced.len(), 12);
        assert!(balanced
            .iter()
            .all(|q| !q.question.contains(locale::DUPLICATE_SUFFIX)));
    }

    #[test]
    fn buckets_are_balanced_independently() {
        let mut questions = vec![question("lonely", "Τρόμου", Difficulty::Hard)];
        questions.extend((0..10).map(|i| question(&format!("q{i}"), "Τρόμου", Difficulty::Easy)));

        let balanced = ensure_minimum_per_bucket(questions, 10);
        let counts = bucket_counts(&balanced);
        assert_eq!(
            counts[&("Τρόμου".to_string(), Difficulty::Hard)],
            10
        );
        assert_eq!(
            counts[&("Τρόμου".to_string(), Difficulty::Easy)],
            10
        );
    }
}
