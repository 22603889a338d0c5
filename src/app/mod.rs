pub mod provider;
pub mod tmdb;

pub use provider::MovieProvider;
