//! Per-movie question builders. Each builder either emits its question(s)
//! or skips the movie silently when the metadata is not good enough; a
//! distractor pool failure bubbles up as an `EngineError` for the engine to
//! log and skip.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Difficulty, MovieRecord, Question};

use super::{difficulty, distractors, locale, redact, EngineError};

/// Minimum overview length (chars) before a plot question is worth asking.
const MIN_PLOT_LEN: usize = 20;
/// Popular movies with long plots get a second, truncated plot question.
const SECOND_PLOT_MIN_POPULARITY: f64 = 10.0;
const SECOND_PLOT_MIN_LEN: usize = 50;
const PLOT_TRUNCATE_AT: usize = 100;

/// Character names that mark non-role credits; such leads make bad trivia.
const BLOCKED_ROLE_MARKERS: [&str; 5] =
    ["Self", "Himself", "Herself", "Narrator", "uncredited"];

/// Distractors + correct answer, in randomized display order.
fn assemble_options<R: Rng + ?Sized>(
    rng: &mut R,
    distractors: Vec<String>,
    correct: &str,
) -> Vec<String> {
    let mut options = distractors;
    options.push(correct.to_string());
    options.shuffle(rng);
    options
}

/// "Which year was «title» released?" Skipped when the release date is
/// missing or too short to carry a year.
pub fn year_question<R: Rng + ?Sized>(
    rng: &mut R,
    movie: &MovieRecord,
    category: &str,
    base: Difficulty,
    current_year: i32,
) -> Result<Option<Question>, EngineError> {
    let Some(year) = movie.release_year() else {
        return Ok(None);
    };
    let Ok(year_num) = year.parse::<i32>() else {
        return Ok(None);
    };

    let wrong_years = distractors::year_distractors(rng, year_num, current_year)?;
    let options = assemble_options(rng, wrong_years, year);

    Ok(Some(Question {
        question: locale::year_prompt(&movie.title),
        options,
        correct_answer: year.to_string(),
        category: category.to_string(),
        difficulty: difficulty::for_year_question(base),
    }))
}

fn plot_question_from<R: Rng + ?Sized>(
    rng: &mut R,
    movie: &MovieRecord,
    plot_text: &str,
    category: &str,
    base: Difficulty,
    all_titles: &[String],
) -> Result<Question, EngineError> {
    let redacted = redact::redact_title(plot_text, &movie.title);
    let wrong_titles = distractors::title_distractors(rng, &movie.title, all_titles)?;
    let options = assemble_options(rng, wrong_titles, &movie.title);
    // unwrap is safe: PLOT_INTROS is a non-empty const array
    let intro = locale::PLOT_INTROS.choose(rng).unwrap();

    Ok(Question {
        question: locale::plot_prompt(intro, &redacted),
        options,
        correct_answer: movie.title.clone(),
        category: category.to_string(),
        difficulty: base,
    })
}

/// "Guess the movie from this redacted plot." Popular, well-described
/// movies additionally get a second question built from a truncated plot,
/// which pads out the question volume where players expect it.
pub fn plot_questions<R: Rng + ?Sized>(
    rng: &mut R,
    movie: &MovieRecord,
    category: &str,
    base: Difficulty,
    all_titles: &[String],
) -> Result<Vec<Question>, EngineError> {
    let plot_len = movie.overview.chars().count();
    if plot_len <= MIN_PLOT_LEN {
        return Ok(Vec::new());
    }

    let mut questions = vec![plot_question_from(
        rng,
        movie,
        &movie.overview,
        category,
        base,
        all_titles,
    )?];

    if movie.popularity > SECOND_PLOT_MIN_POPULARITY && plot_len > SECOND_PLOT_MIN_LEN {
        let short_plot = if plot_len > PLOT_TRUNCATE_AT {
            let truncated: String = movie.overview.chars().take(PLOT_TRUNCATE_AT).collect();
            format!("{truncated}...")
        } else {
            movie.overview.clone()
        };
        questions.push(plot_question_from(
            rng, movie, &short_plot, category, base, all_titles,
        )?);
    }

    Ok(questions)
}

/// "Which actor played 'character' in «title»?" Built from the lead cast
/// member only; generic credits (Self, Narrator, uncredited roles) are
/// filtered out. The caller guards the global pool size.
pub fn actor_question<R: Rng + ?Sized>(
    rng: &mut R,
    movie: &MovieRecord,
    category: &str,
    base: Difficulty,
    actor_pool: &[String],
) -> Result<Option<Question>, EngineError> {
    let Some(lead) = movie.cast.first() else {
        return Ok(None);
    };

    if lead.character.is_empty()
        || BLOCKED_ROLE_MARKERS
            .iter()
            .any(|marker| lead.character.contains(marker))
    {
        return Ok(None);
    }

    let wrong_actors = distractors::actor_distractors(rng, &lead.name, actor_pool)?;
    let options = assemble_options(rng, wrong_actors, &lead.name);

    Ok(Some(Question {
        question: locale::actor_prompt(&lead.character, &movie.title),
        options,
        correct_answer: lead.name.clone(),
        category: category.to_string(),
        difficulty: difficulty::for_actor_question(base),
    }))
}
