pub use super::employee_details::Entity as EmployeeDetails;
