use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000003_apartment::Apartment;

static IDX_APARTMENT_INFO_ID_APARTMENT: &str = "idx-apartment_info-id_apartment";
static FK_APARTMENT_INFO_ID_APARTMENT: &str = "fk-apartment_info-id_apartment";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApartmentInfo::Table)
                    .if_not_exists()
                    .col(pk_auto(ApartmentInfo::Id))
                    .col(integer(ApartmentInfo::IdApartment))
                    .col(integer(ApartmentInfo::RoomNumber))
                    .col(double(ApartmentInfo::CommonSquare))
                    .col(double_null(ApartmentInfo::KitchenSquare))
                    .col(boolean_null(ApartmentInfo::Balcony))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APARTMENT_INFO_ID_APARTMENT)
                    .table(ApartmentInfo::Table)
                    .col(ApartmentInfo::IdApartment)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APARTMENT_INFO_ID_APARTMENT)
                    .from_tbl(ApartmentInfo::Table)
                    .from_col(ApartmentInfo::IdApartment)
                    .to_tbl(Apartment::Table)
                    .to_col(Apartment::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APARTMENT_INFO_ID_APARTMENT)
                    .table(ApartmentInfo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APARTMENT_INFO_ID_APARTMENT)
                    .table(ApartmentInfo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ApartmentInfo::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ApartmentInfo {
    Table,
    Id,
    IdApartment,
    RoomNumber,
    CommonSquare,
    KitchenSquare,
    Balcony,
}
