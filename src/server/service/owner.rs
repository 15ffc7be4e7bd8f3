use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::DeleteStatusDto,
        owner::{OwnerDto, OwnerFullDto},
    },
    server::{
        data::owner::OwnerRepository,
        error::{data::DataError, Error},
    },
};

/// Owners are accepted without apartments and returned with the apartments they own
pub struct OwnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerService<'a> {
    /// Creates a new instance of [`OwnerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or updates one owner in its own transaction
    pub async fn upsert(&self, owner: OwnerDto) -> Result<OwnerFullDto, Error> {
        Ok(OwnerRepository::new(self.db).upsert(owner).await?)
    }

    /// Inserts or updates owners in a single transaction, all or nothing
    pub async fn upsert_many(&self, owners: Vec<OwnerDto>) -> Result<Vec<OwnerFullDto>, Error> {
        Ok(OwnerRepository::new(self.db).upsert_many(owners).await?)
    }

    /// Get an owner by id, failing with [`DataError::ObjectNotFound`] when it does not exist
    pub async fn get_one_by_id(&self, id: i32) -> Result<OwnerFullDto, Error> {
        let owner = OwnerRepository::new(self.db)
            .get_one_full_by_id(id)
            .await?
            .ok_or(DataError::ObjectNotFound)?;

        Ok(owner)
    }

    /// Same as [`Self::get_one_by_id`] using a filtered select
    pub async fn select_one_by_id(&self, id: i32) -> Result<OwnerFullDto, Error> {
        let owner = OwnerRepository::new(self.db)
            .select_one_full_by_id(id)
            .await?
            .ok_or(DataError::ObjectNotFound)?;

        Ok(owner)
    }

    /// All owners ordered by id
    pub async fn get_all_full(&self) -> Result<Vec<OwnerFullDto>, Error> {
        Ok(OwnerRepository::new(self.db).select_all_full().await?)
    }

    /// All owners in their short form, ordered by id
    pub async fn get_all_short(&self) -> Result<Vec<OwnerDto>, Error> {
        Ok(OwnerRepository::new(self.db).select_all_short().await?)
    }

    /// Deletes an owner, their apartments stay without an owner
    pub async fn delete(&self, id: i32) -> Result<DeleteStatusDto, Error> {
        let deleted = OwnerRepository::new(self.db).delete(id).await?;

        Ok(DeleteStatusDto { deleted })
    }

    /// Deletes owners by id, `deleted` is false unless every id was removed
    pub async fn delete_many(&self, ids: Vec<i32>) -> Result<DeleteStatusDto, Error> {
        let deleted = OwnerRepository::new(self.db).delete_many(ids).await?;

        Ok(DeleteStatusDto { deleted })
    }
}
