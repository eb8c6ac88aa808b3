//! Employee resource; same shape as `customer` with department and salary
//! in place of the address block.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::EmployeeService;
