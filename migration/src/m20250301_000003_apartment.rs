use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250301_000001_building::Building, m20250301_000002_owner::Owner};

static IDX_APARTMENT_ID_BUILDING: &str = "idx-apartment-id_building";
static IDX_APARTMENT_ID_OWNER: &str = "idx-apartment-id_owner";
static UNIQUE_ID_BUILDING_UTILITY_ACCOUNT: &str = "unique_id_building_utility_account";
static FK_APARTMENT_ID_BUILDING: &str = "fk-apartment-id_building";
static FK_APARTMENT_ID_OWNER: &str = "fk-apartment-id_owner";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Apartment::Table)
                    .if_not_exists()
                    .col(pk_auto(Apartment::Id))
                    .col(integer(Apartment::IdBuilding))
                    .col(integer_null(Apartment::IdOwner))
                    .col(string_len(Apartment::UtilityAccount, 100))
                    .col(integer(Apartment::ApartmentNumber))
                    .col(integer(Apartment::Floor))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_ID_BUILDING_UTILITY_ACCOUNT)
                    .table(Apartment::Table)
                    .col(Apartment::IdBuilding)
                    .col(Apartment::UtilityAccount)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APARTMENT_ID_BUILDING)
                    .table(Apartment::Table)
                    .col(Apartment::IdBuilding)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APARTMENT_ID_OWNER)
                    .table(Apartment::Table)
                    .col(Apartment::IdOwner)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APARTMENT_ID_BUILDING)
                    .from_tbl(Apartment::Table)
                    .from_col(Apartment::IdBuilding)
                    .to_tbl(Building::Table)
                    .to_col(Building::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APARTMENT_ID_OWNER)
                    .from_tbl(Apartment::Table)
                    .from_col(Apartment::IdOwner)
                    .to_tbl(Owner::Table)
                    .to_col(Owner::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APARTMENT_ID_OWNER)
                    .table(Apartment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APARTMENT_ID_BUILDING)
                    .table(Apartment::Table)
                    .to_owned(),
            )
            .await?;

        for index in [
            IDX_APARTMENT_ID_OWNER,
            IDX_APARTMENT_ID_BUILDING,
            UNIQUE_ID_BUILDING_UTILITY_ACCOUNT,
        ] {
            manager
                .drop_index(Index::drop().name(index).table(Apartment::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Apartment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Apartment {
    Table,
    Id,
    IdBuilding,
    IdOwner,
    UtilityAccount,
    ApartmentNumber,
    Floor,
}
