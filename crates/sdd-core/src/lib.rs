pub mod catalog;
pub mod department;
pub mod error;
pub mod input;
pub mod router;
pub mod scorer;
pub mod types;
pub mod validate;

pub use error::{Result, SddError};
