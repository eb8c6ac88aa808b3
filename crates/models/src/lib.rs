pub mod customer;
pub mod db;
pub mod employee;
pub mod errors;
pub mod validation;
