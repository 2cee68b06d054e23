use sea_orm_migration::{prelude::*, schema::*};

static IDX_EMPLOYEE_DETAILS_SALARY: &str = "idx-employee_details-salary";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeDetails::Table)
                    .if_not_exists()
                    // Identifiers come from the remote directory, so no auto increment
                    .col(integer(EmployeeDetails::Id).primary_key())
                    .col(string(EmployeeDetails::Name))
                    .col(integer(EmployeeDetails::Salary))
                    .col(integer(EmployeeDetails::Age))
                    .col(string_null(EmployeeDetails::ProfileImage))
                    .col(timestamp(EmployeeDetails::CreatedAt))
                    .col(timestamp(EmployeeDetails::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EMPLOYEE_DETAILS_SALARY)
                    .table(EmployeeDetails::Table)
                    .col(EmployeeDetails::Salary)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EMPLOYEE_DETAILS_SALARY)
                    .table(EmployeeDetails::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EmployeeDetails::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EmployeeDetails {
    Table,
    Id,
    Name,
    Salary,
    Age,
    ProfileImage,
    CreatedAt,
    UpdatedAt,
}
