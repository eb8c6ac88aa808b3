//! Customer resource: domain shapes, repository abstraction, and the service
//! enforcing email uniqueness and not-found semantics.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::CustomerService;
