mod errors;
pub mod files;

pub use errors::Error;

pub type TriviarrResult<T> = Result<T, Error>;
