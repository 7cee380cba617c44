//! Row models and request DTOs.
//!
//! Entity modules contain a `FromRow` + `Serialize` row struct and a
//! `Deserialize` create DTO. Field names match the database columns, which
//! are also the JSON keys on the wire. Create DTOs accept the short aliases
//! the static front end posts and parse numeric form strings.

pub mod application;
pub mod audit;
pub mod company;
pub mod department;
pub mod job_role;
pub mod placement;
pub mod report;
pub mod student;
pub mod view;
