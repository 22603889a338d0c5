use async_trait::async_trait;

use crate::models::MovieRecord;
use crate::utils::Error;

/// Source of raw and enriched movie metadata. The engine never talks to a
/// provider directly; it only sees the materialized `MovieRecord` list.
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// Fetch up to `count` popular movies as raw records (no genres/cast).
    async fn fetch_popular(&self, count: usize) -> Result<Vec<MovieRecord>, Error>;

    /// Fill in genres, cast and refreshed popularity for each record.
    /// Per-movie failures keep the un-enriched record, never abort.
    async fn enrich(&self, movies: Vec<MovieRecord>) -> Result<Vec<MovieRecord>, Error>;
}
