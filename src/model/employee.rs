use directory_client::model::employee::RemoteEmployeeRecord;
use serde::{Deserialize, Serialize};

/// An employee as returned by the directory API endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Employee {
    /// Identifier assigned by the remote directory
    pub id: i32,
    pub name: String,
    pub salary: i32,
    pub age: i32,
    /// Opaque profile image reference, empty or absent when unset
    pub profile_image: Option<String>,
}

impl From<RemoteEmployeeRecord> for Employee {
    fn from(record: RemoteEmployeeRecord) -> Self {
        Self {
            id: record.id,
            name: record.employee_name,
            salary: record.employee_salary,
            age: record.employee_age,
            profile_image: record.profile_image,
        }
    }
}

impl From<entity::employee_details::Model> for Employee {
    fn from(model: entity::employee_details::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            salary: model.salary,
            age: model.age,
            profile_image: model.profile_image,
        }
    }
}
