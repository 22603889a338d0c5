use crate::models::Difficulty;

/// Popularity-first difficulty score, with an age bump for older movies.
///
/// Scoring: 1-2 points = Easy (famous), 3-4 = Medium, 5+ = Hard (niche).
/// An unknown or unparsable year falls back to the popularity rule alone.
pub fn classify(year: Option<i32>, popularity: f64) -> Difficulty {
    let mut score = if popularity > 50.0 {
        1
    } else if popularity > 15.0 {
        2
    } else if popularity > 5.0 {
        3
    } else {
        5
    };

    // Pre-1980 movies are harder to recall, unless they stayed famous
    if let Some(year) = year {
        if year < 1980 && popularity < 30.0 {
            score += 1;
        }
    }

    match score {
        ..=2 => Difficulty::Easy,
        3..=4 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

/// Numeric recall is harder: year questions bump Medium up to Hard.
pub fn for_year_question(base: Difficulty) -> Difficulty {
    match base {
        Difficulty::Medium => Difficulty::Hard,
        other => other,
    }
}

/// Casting trivia is easier: actor questions drop Medium down to Easy.
pub fn for_actor_question(base: Difficulty) -> Difficulty {
    match base {
        Difficulty::Medium => Difficulty::Easy,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn famous_recent_movie_is_easy() {
        assert_eq!(classify(Some(2020), 60.0), Difficulty::Easy);
    }

    #[test]
    fn old_moderate_movie_gets_age_bump() {
        // popularity 10 -> score 3, pre-1980 and < 30 -> +1 -> Medium
        assert_eq!(classify(Some(1975), 10.0), Difficulty::Medium);
    }

    #[test]
    fn old_obscure_movie_is_hard() {
        assert_eq!(classify(Some(1970), 3.0), Difficulty::Hard);
    }

    #[test]
    fn unknown_year_uses_popularity_only() {
        assert_eq!(classify(None, 60.0), Difficulty::Easy);
        assert_eq!(classify(None, 10.0), Difficulty::Medium);
        assert_eq!(classify(None, 1.0), Difficulty::Hard);
    }

    #[test]
    fn classification_is_deterministic() {
        for _ in 0..10 {
            assert_eq!(classify(Some(1975), 10.0), classify(Some(1975), 10.0));
        }
    }

    #[test]
    fn year_questions_escalate_medium() {
        assert_eq!(for_year_question(Difficulty::Medium), Difficulty::Hard);
        assert_eq!(for_year_question(Difficulty::Easy), Difficulty::Easy);
        assert_eq!(for_year_question(Difficulty::Hard), Difficulty::Hard);
    }

    #[test]
    fn actor_questions_deescalate_medium() {
        assert_eq!(for_actor_question(Difficulty::Medium), Difficulty::Easy);
        assert_eq!(for_actor_question(Difficulty::Easy), Difficulty::Easy);
        assert_eq!(for_actor_question(Difficulty::Hard), Difficulty::Hard);
    }
}
