//! Shared building blocks for the table service crates.
//! - `types`: wire types shared by every resource (health, response envelope).
//! - `utils::logging`: tracing subscriber setup.

pub mod types;
pub mod utils;
