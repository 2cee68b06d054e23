use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder};

use crate::model::employee::Employee;

/// Durable mirror of employee records accepted from the remote directory.
pub struct EmployeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmployeeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn to_active_model(employee: Employee) -> entity::employee_details::ActiveModel {
        let now = Utc::now().naive_utc();

        entity::employee_details::ActiveModel {
            id: ActiveValue::Set(employee.id),
            name: ActiveValue::Set(employee.name),
            salary: ActiveValue::Set(employee.salary),
            age: ActiveValue::Set(employee.age),
            profile_image: ActiveValue::Set(employee.profile_image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
    }

    /// Columns overwritten when an employee is already cached; `created_at` is kept
    fn on_conflict() -> OnConflict {
        OnConflict::column(entity::employee_details::Column::Id)
            .update_columns([
                entity::employee_details::Column::Name,
                entity::employee_details::Column::Salary,
                entity::employee_details::Column::Age,
                entity::employee_details::Column::ProfileImage,
                entity::employee_details::Column::UpdatedAt,
            ])
            .to_owned()
    }

    /// Insert or replace every employee by identifier
    pub async fn upsert_many(
        &self,
        employees: Vec<Employee>,
    ) -> Result<Vec<entity::employee_details::Model>, DbErr> {
        if employees.is_empty() {
            return Ok(Vec::new());
        }

        let employees = employees.into_iter().map(Self::to_active_model);

        entity::prelude::EmployeeDetails::insert_many(employees)
            .on_conflict(Self::on_conflict())
            .exec_with_returning(self.db)
            .await
    }

    /// Insert or replace a single employee by identifier
    pub async fn upsert(
        &self,
        employee: Employee,
    ) -> Result<entity::employee_details::Model, DbErr> {
        entity::prelude::EmployeeDetails::insert(Self::to_active_model(employee))
            .on_conflict(Self::on_conflict())
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::employee_details::Model>, DbErr> {
        entity::prelude::EmployeeDetails::find()
            .order_by_asc(entity::employee_details::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::employee_details::Model>, DbErr> {
        entity::prelude::EmployeeDetails::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Delete a cached employee
    ///
    /// Deleting an identifier that is not cached is not an error, check
    /// [`DeleteResult::rows_affected`] to tell the cases apart.
    pub async fn delete_by_id(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::EmployeeDetails::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
