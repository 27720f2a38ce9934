//! Domain entities and value objects for the tender console.

pub mod bid;
pub mod stats;
pub mod tender;
pub mod types;
pub mod user;
