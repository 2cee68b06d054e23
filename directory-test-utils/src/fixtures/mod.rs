//! Test fixture modules for database and HTTP mock creation.
//!
//! - `employee` - cached employee rows, remote directory records and mock endpoints

pub mod employee;
