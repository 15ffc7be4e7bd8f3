use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000003_apartment::Apartment;

static IDX_BILL_ID_APARTMENT: &str = "idx-bill-id_apartment";
static FK_BILL_ID_APARTMENT: &str = "fk-bill-id_apartment";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bill::Table)
                    .if_not_exists()
                    .col(pk_auto(Bill::Id))
                    .col(integer(Bill::IdApartment))
                    .col(string_len(Bill::BillPeriod, 100))
                    .col(double(Bill::BillSize))
                    .col(boolean(Bill::IsPaid))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BILL_ID_APARTMENT)
                    .table(Bill::Table)
                    .col(Bill::IdApartment)
                    .to_owned(),
            )
            .await?;

        // No ON DELETE action: an apartment with bills cannot be removed
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BILL_ID_APARTMENT)
                    .from_tbl(Bill::Table)
                    .from_col(Bill::IdApartment)
                    .to_tbl(Apartment::Table)
                    .to_col(Apartment::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BILL_ID_APARTMENT)
                    .table(Bill::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BILL_ID_APARTMENT)
                    .table(Bill::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bill::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Bill {
    Table,
    Id,
    IdApartment,
    BillPeriod,
    BillSize,
    IsPaid,
}
