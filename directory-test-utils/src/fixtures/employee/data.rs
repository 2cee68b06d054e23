use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};

use crate::fixtures::employee::EmployeeFixtures;

impl<'a> EmployeeFixtures<'a> {
    /// Insert an employee directly into the cache table.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted cache row
    /// - `Err(DbErr)` - Insert failed, usually because the table was not created
    pub async fn insert_cached_employee(
        &mut self,
        id: i32,
        name: &str,
        salary: i32,
        age: i32,
    ) -> Result<entity::employee_details::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::employee_details::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(name.to_string()),
            salary: ActiveValue::Set(salary),
            age: ActiveValue::Set(age),
            profile_image: ActiveValue::Set(Some(String::new())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(&self.setup.db)
        .await
    }
}
