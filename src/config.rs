use serde::Deserialize;

impl Config {

    pub fn init() -> Result<Self, config::ConfigError> {
        // get config toml dir from env, with default
        let config_path =
            std::env::var("TRIVIARR_CONFIG_PATH").unwrap_or_else(|_| String::from("./config.toml"));

        let config = config::Config::builder()
            // Add in config toml
            .add_source(config::File::with_name(&config_path))
            // Add in settings from the environment (with a prefix of TRIVIARR)
            .add_source(config::Environment::with_prefix("TRIVIARR").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct Config {
    pub logs: LogsConfig,
    pub tmdb: TmdbConfig,
    pub files: FilesConfig,
}

// ===============================================================================
// Tmdb
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct TmdbConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Language sent with the popular-movies listing requests.
    #[serde(default = "default_language")]
    pub language: String,
    /// How many popular movies to pull (20 per page).
    #[serde(default = "default_movies_to_fetch")]
    pub movies_to_fetch: usize,
    /// Skip the fetch+enrich stages and regenerate questions from the
    /// enriched movie list already on disk.
    #[serde(default)]
    pub skip_fetch: bool,
}

fn default_base_url() -> String {
    String::from("https://api.themoviedb.org/3")
}

fn default_language() -> String {
    String::from("en-US")
}

fn default_movies_to_fetch() -> usize {
    500
}

// ===============================================================================
// Files
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct FilesConfig {
    #[serde(default = "default_movie_list_path")]
    pub movie_list_path: String,
    #[serde(default = "default_enriched_movie_list_path")]
    pub enriched_movie_list_path: String,
    #[serde(default = "default_question_list_path")]
    pub question_list_path: String,
}

fn default_movie_list_path() -> String {
    String::from("movie_trivia.json")
}

fn default_enriched_movie_list_path() -> String {
    String::from("movie_trivia_enriched.json")
}

fn default_question_list_path() -> String {
    String::from("questions.json")
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct LogsConfig {
    pub level: String,
}
