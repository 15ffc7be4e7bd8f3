use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Owner::Table)
                    .if_not_exists()
                    .col(pk_auto(Owner::Id))
                    .col(string_len(Owner::Fullname, 100))
                    .col(string_len(Owner::PassportSeries, 4))
                    .col(string_len(Owner::PassportValues, 6))
                    .col(string_len_uniq(Owner::Phone, 11))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Owner::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Owner {
    Table,
    Id,
    Fullname,
    PassportSeries,
    PassportValues,
    Phone,
}
