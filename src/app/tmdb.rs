//! TMDB client: the popular-movies listing and the per-movie details +
//! credits enrichment call (`append_to_response=credits` folds both into
//! one request).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::TmdbConfig;
use crate::models::{CastMember, MovieRecord};
use crate::utils::Error;

use super::provider::MovieProvider;

const MOVIES_PER_PAGE: usize = 20;
/// At most 5 billed cast members are kept per movie.
const MAX_CAST: usize = 5;

const LIST_SLEEP: Duration = Duration::from_millis(200);
const ENRICH_SLEEP: Duration = Duration::from_millis(150);

// ===============================================================================
// Wire models
// ===============================================================================

#[derive(Debug, Deserialize)]
struct PopularPage {
    #[serde(default)]
    results: Vec<PopularEntry>,
}

#[derive(Debug, Deserialize)]
struct PopularEntry {
    id: u64,
    title: String,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    overview: String,
    #[serde(default)]
    popularity: f64,
    #[serde(default)]
    vote_average: f64,
}

#[derive(Debug, Deserialize)]
struct MovieDetails {
    #[serde(default)]
    genres: Vec<GenreEntry>,
    #[serde(default)]
    credits: Option<Credits>,
    #[serde(default)]
    popularity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct GenreEntry {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Credits {
    #[serde(default)]
    cast: Vec<CreditEntry>,
}

#[derive(Debug, Deserialize)]
struct CreditEntry {
    name: String,
    #[serde(default)]
    character: String,
}

// ===============================================================================
// Client
// ===============================================================================

#[derive(Debug, Clone)]
pub struct TmdbClient {
    cfg: TmdbConfig,
    client: reqwest::Client,
}

impl TmdbClient {
    pub fn new(cfg: TmdbConfig) -> Self {
        Self {
            cfg,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.cfg.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl MovieProvider for TmdbClient {
    async fn fetch_popular(&self, count: usize) -> Result<Vec<MovieRecord>, Error> {
        let total_pages = count / MOVIES_PER_PAGE;
        let mut all_movies = Vec::with_capacity(count);

        info!("Starting download of {count} popular movies");

        for page in 1..=total_pages {
            let page_str = page.to_string();
            let resp = self
                .client
                .get(self.url("/movie/popular"))
                .query(&[
                    ("api_key", self.cfg.api_key.as_str()),
                    ("language", self.cfg.language.as_str()),
                    ("page", page_str.as_str()),
                ])
                .send()
                .await?;

            if !resp.status().is_success() {
                warn!(
                    "Popular listing page {page} failed with HTTP {}; keeping {} movies fetched so far",
                    resp.status(),
                    all_movies.len()
                );
                break;
            }

            let parsed: PopularPage = resp.json().await?;
            all_movies.extend(parsed.results.into_iter().map(|entry| MovieRecord {
                id: entry.id,
                title: entry.title,
                release_date: entry.release_date,
                overview: entry.overview,
                popularity: entry.popularity,
                vote_average: entry.vote_average,
                genres: Vec::new(),
                cast: Vec::new(),
            }));

            info!(
                "Page {page}/{total_pages} processed, total movies: {}",
                all_movies.len()
            );

            // TMDB rate limits
            tokio::time::sleep(LIST_SLEEP).await;
        }

        Ok(all_movies)
    }

    async fn enrich(&self, movies: Vec<MovieRecord>) -> Result<Vec<MovieRecord>, Error> {
        let total = movies.len();
        let mut enriched = Vec::with_capacity(total);

        info!("Fetching genres & cast for {total} movies");

        for (index, mut movie) in movies.into_iter().enumerate() {
            let resp = self
                .client
                .get(self.url(&format!("/movie/{}", movie.id)))
                .query(&[
                    ("api_key", self.cfg.api_key.as_str()),
                    ("append_to_response", "credits"),
                ])
                .send()
                .await;

            match resp {
                Ok(resp) if resp.status().is_success() => match resp.json::<MovieDetails>().await {
                    Ok(details) => {
                        movie.genres = details.genres.into_iter().map(|g| g.name).collect();
                        movie.cast = details
                            .credits
                            .map(|c| {
                                c.cast
                                    .into_iter()
                                    .take(MAX_CAST)
                                    .map(|m| CastMember {
                                        name: m.name,
                                        character: m.character,
                                    })
                                    .collect()
                            })
                            .unwrap_or_default();
                        if let Some(popularity) = details.popularity {
                            movie.popularity = popularity;
                        }
                    }
                    Err(e) => {
                        warn!("Malformed details for movie {}: {e}", movie.id);
                    }
                },
                Ok(resp) => {
                    warn!("Details for movie {} failed: HTTP {}", movie.id, resp.status());
                }
                Err(e) => {
                    warn!("Details for movie {} failed: {e}", movie.id);
                }
            }

            // keep the record either way; enrichment failures are not fatal
            enriched.push(movie);

            if (index + 1) % 10 == 0 {
                info!("Processed {}/{total}", index + 1);
            }

            tokio::time::sleep(ENRICH_SLEEP).await;
        }

        Ok(enriched)
    }
}
