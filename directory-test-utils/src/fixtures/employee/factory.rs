use directory_client::model::employee::RemoteEmployeeRecord;

/// Create a remote directory record with an empty profile image.
pub fn mock_employee_record(id: i32, name: &str, salary: i32, age: i32) -> RemoteEmployeeRecord {
    RemoteEmployeeRecord {
        id,
        employee_name: name.to_string(),
        employee_salary: salary,
        employee_age: age,
        profile_image: Some(String::new()),
    }
}

/// The 13 employee reference set.
///
/// Salaries include a tie at 4500 (Dhiraj, Ramesh), the highest salary is 8400 (Rohit) and
/// seven names contain "raj" in some casing.
pub fn reference_employee_records() -> Vec<RemoteEmployeeRecord> {
    [
        (1, "Dhiraj", 4500, 23),
        (2, "Suraj", 5500, 26),
        (3, "Rajesh", 4100, 22),
        (4, "Ramesh", 4500, 23),
        (5, "Rajendra", 4101, 32),
        (6, "Pavan", 6600, 31),
        (7, "Shivam", 7700, 30),
        (8, "Shivraj", 2700, 50),
        (9, "Viraj", 6000, 19),
        (10, "Siraj", 6235, 20),
        (11, "Virat", 4511, 24),
        (12, "Rohit", 8400, 23),
        (13, "Rishabh", 900, 25),
    ]
    .into_iter()
    .map(|(id, name, salary, age)| mock_employee_record(id, name, salary, age))
    .collect()
}
