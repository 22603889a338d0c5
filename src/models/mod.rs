pub mod movie;
pub mod question;

pub use movie::*;
pub use question::*;
