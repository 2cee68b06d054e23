pub mod prelude;

pub mod employee_details;
