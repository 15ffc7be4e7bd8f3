use sea_orm::DatabaseConnection;

use crate::{
    model::{api::DeleteStatusDto, bill::BillDto},
    server::{
        data::bill::BillRepository,
        error::{data::DataError, Error},
    },
};

pub struct BillService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillService<'a> {
    /// Creates a new instance of [`BillService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or updates one bill in its own transaction
    pub async fn upsert(&self, bill: BillDto) -> Result<BillDto, Error> {
        Ok(BillRepository::new(self.db).upsert(bill).await?)
    }

    /// Inserts or updates bills in a single transaction, all or nothing
    pub async fn upsert_many(&self, bills: Vec<BillDto>) -> Result<Vec<BillDto>, Error> {
        Ok(BillRepository::new(self.db).upsert_many(bills).await?)
    }

    /// Get a bill by id, failing with [`DataError::ObjectNotFound`] when it does not exist
    pub async fn get_one_by_id(&self, id: i32) -> Result<BillDto, Error> {
        let bill = BillRepository::new(self.db)
            .get_one_full_by_id(id)
            .await?
            .ok_or(DataError::ObjectNotFound)?;

        Ok(bill)
    }

    /// Same as [`Self::get_one_by_id`] using a filtered select
    pub async fn select_one_by_id(&self, id: i32) -> Result<BillDto, Error> {
        let bill = BillRepository::new(self.db)
            .select_one_full_by_id(id)
            .await?
            .ok_or(DataError::ObjectNotFound)?;

        Ok(bill)
    }

    /// All bills ordered by id
    pub async fn get_all_full(&self) -> Result<Vec<BillDto>, Error> {
        Ok(BillRepository::new(self.db).select_all_full().await?)
    }

    /// All bills in their short form, ordered by id
    pub async fn get_all_short(&self) -> Result<Vec<BillDto>, Error> {
        Ok(BillRepository::new(self.db).select_all_short().await?)
    }

    /// Deletes one bill, `deleted` is false when it did not exist
    pub async fn delete(&self, id: i32) -> Result<DeleteStatusDto, Error> {
        let deleted = BillRepository::new(self.db).delete(id).await?;

        Ok(DeleteStatusDto { deleted })
    }

    /// Deletes bills by id, `deleted` is false unless every id was removed
    pub async fn delete_many(&self, ids: Vec<i32>) -> Result<DeleteStatusDto, Error> {
        let deleted = BillRepository::new(self.db).delete_many(ids).await?;

        Ok(DeleteStatusDto { deleted })
    }
}
