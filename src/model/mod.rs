pub mod api;
pub mod employee;
