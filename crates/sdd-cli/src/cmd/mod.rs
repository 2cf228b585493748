pub mod department;
pub mod detect;
pub mod validate;
