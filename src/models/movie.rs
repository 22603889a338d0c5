use serde::{Deserialize, Serialize};

/// One billed cast member, in billing order (index 0 = lead).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    pub character: String,
}

/// Normalized movie metadata as persisted in the enriched movie list.
///
/// `genres` and `cast` are empty until the enrichment stage has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: u64,
    pub title: String,
    /// ISO-like date string ("2010-07-15"); first 4 chars are the year.
    /// May be absent or malformed, in which case no year question is built.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

impl MovieRecord {
    /// 4-character release year substring, if the date carries one.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date.as_deref().and_then(|d| d.get(..4))
    }
}
