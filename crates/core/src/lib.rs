//! Domain vocabulary shared by the database and API crates.

pub mod entity;
pub mod lenient;
pub mod placement;
pub mod types;
