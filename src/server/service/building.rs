use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::DeleteStatusDto,
        building::{BuildingDto, BuildingFullDto},
    },
    server::{
        data::building::BuildingRepository,
        error::{data::DataError, Error},
    },
};

/// Buildings are returned without their apartments except by [`BuildingService::get_all_full`]
pub struct BuildingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BuildingService<'a> {
    /// Creates a new instance of [`BuildingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or updates one building in its own transaction
    pub async fn upsert(&self, building: BuildingDto) -> Result<BuildingDto, Error> {
        let stored = BuildingRepository::new(self.db).upsert(building).await?;

        Ok(BuildingDto::from(stored))
    }

    /// Inserts or updates buildings in a single transaction, all or nothing
    pub async fn upsert_many(&self, buildings: Vec<BuildingDto>) -> Result<Vec<BuildingDto>, Error> {
        let stored = BuildingRepository::new(self.db)
            .upsert_many(buildings)
            .await?;

        Ok(stored.into_iter().map(BuildingDto::from).collect())
    }

    /// Get a building by id, failing with [`DataError::ObjectNotFound`] when it does not exist
    pub async fn get_one_by_id(&self, id: i32) -> Result<BuildingDto, Error> {
        let building = BuildingRepository::new(self.db)
            .get_one_full_by_id(id)
            .await?
            .ok_or(DataError::ObjectNotFound)?;

        Ok(BuildingDto::from(building))
    }

    /// Same as [`Self::get_one_by_id`] using a filtered select
    pub async fn select_one_by_id(&self, id: i32) -> Result<BuildingDto, Error> {
        let building = BuildingRepository::new(self.db)
            .select_one_full_by_id(id)
            .await?
            .ok_or(DataError::ObjectNotFound)?;

        Ok(BuildingDto::from(building))
    }

    /// All buildings with their apartments embedded
    pub async fn get_all_full(&self) -> Result<Vec<BuildingFullDto>, Error> {
        Ok(BuildingRepository::new(self.db).select_all_full().await?)
    }

    /// All buildings in their short form, ordered by id
    pub async fn get_all_short(&self) -> Result<Vec<BuildingDto>, Error> {
        Ok(BuildingRepository::new(self.db).select_all_short().await?)
    }

    /// Deletes one building, `deleted` is false when it did not exist
    pub async fn delete(&self, id: i32) -> Result<DeleteStatusDto, Error> {
        let deleted = BuildingRepository::new(self.db).delete(id).await?;

        Ok(DeleteStatusDto { deleted })
    }

    /// Deletes buildings by id, `deleted` is false unless every id was removed
    pub async fn delete_many(&self, ids: Vec<i32>) -> Result<DeleteStatusDto, Error> {
        let deleted = BuildingRepository::new(self.db).delete_many(ids).await?;

        Ok(DeleteStatusDto { deleted })
    }
}
