//! Service layer for the customer and employee tables.
//! - Business rules (email uniqueness, not-found) live in the per-resource services.
//! - Persistence is reached only through the repository traits.
//! - Entities and validation come from the `models` crate.

pub mod customer;
pub mod employee;
pub mod errors;
mod repo_support;
#[cfg(test)]
pub mod test_support;
