use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Building::Table)
                    .if_not_exists()
                    .col(pk_auto(Building::Id))
                    .col(string_len_uniq(Building::Address, 200))
                    .col(integer(Building::FloorsNumber))
                    .col(integer(Building::LiftNumber))
                    .col(string_len(Building::ProjectName, 100))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Building::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Building {
    Table,
    Id,
    Address,
    FloorsNumber,
    LiftNumber,
    ProjectName,
}
