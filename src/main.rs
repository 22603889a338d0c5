use std::str::FromStr;

use chrono::Datelike;
use tracing::Level;

mod app;
mod config;
mod core;
mod models;
mod utils;

use app::MovieProvider;
use models::MovieRecord;

#[tokio::main]
async fn main() {
    let _ = dotenvy::from_path("./.env");
    let config = config::Config::init().expect("Failed to initialize configuration");
    init_logging(&config);

    let enriched = match load_enriched_movies(&config).await {
        Ok(movies) => movies,
        Err(e) => {
            tracing::error!("Failed to build enriched movie list: {e}");
            return;
        }
    };

    if enriched.is_empty() {
        tracing::error!("Enriched movie list is empty, nothing to generate");
        return;
    }

    let engine = core::engine::QuestionEngine::new(chrono::Utc::now().year());
    let mut rng = rand::thread_rng();
    let questions = engine.generate(&mut rng, &enriched);

    if let Err(e) = utils::files::write_json(&config.files.question_list_path, &questions) {
        tracing::error!("Failed to write question list: {e}");
        return;
    }

    tracing::info!(
        "Generated {} questions, saved to '{}'",
        questions.len(),
        config.files.question_list_path
    );
}

fn init_logging(config: &crate::config::Config) {
    tracing_subscriber::fmt()
        .with_max_level(Level::from_str(&config.logs.level).unwrap_or(Level::INFO))
        .init();
}

/// Stage 1+2 of the pipeline: fetch the popular movie list and enrich it
/// with genres and cast, persisting both intermediate artifacts. With
/// `tmdb.skip_fetch` set, reuse the enriched list already on disk instead.
async fn load_enriched_movies(
    config: &crate::config::Config,
) -> Result<Vec<MovieRecord>, utils::Error> {
    if config.tmdb.skip_fetch {
        tracing::info!(
            "skip_fetch enabled: reading enriched movie list from '{}'",
            config.files.enriched_movie_list_path
        );
        return utils::files::read_json(&config.files.enriched_movie_list_path);
    }

    let provider = app::tmdb::TmdbClient::new(config.tmdb.clone());

    let movies = provider.fetch_popular(config.tmdb.movies_to_fetch).await?;
    utils::files::write_json(&config.files.movie_list_path, &movies)?;
    tracing::info!(
        "{} movies saved to '{}'",
        movies.len(),
        config.files.movie_list_path
    );

    let enriched = provider.enrich(movies).await?;
    utils::files::write_json(&config.files.enriched_movie_list_path, &enriched)?;
    tracing::info!(
        "Enriched movie list saved to '{}'",
        config.files.enriched_movie_list_path
    );

    Ok(enriched)
}
