use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::DeleteStatusDto,
        apartment::{ApartmentDto, ApartmentFullDto, ApartmentWithDebtDto},
    },
    server::{
        data::apartment::ApartmentRepository,
        error::{data::DataError, Error},
    },
};

pub struct ApartmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApartmentService<'a> {
    /// Creates a new instance of [`ApartmentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or updates one apartment in its own transaction
    pub async fn upsert(&self, apartment: ApartmentFullDto) -> Result<ApartmentFullDto, Error> {
        Ok(ApartmentRepository::new(self.db).upsert(apartment).await?)
    }

    /// Inserts or updates apartments in a single transaction, all or nothing
    pub async fn upsert_many(
        &self,
        apartments: Vec<ApartmentFullDto>,
    ) -> Result<Vec<ApartmentFullDto>, Error> {
        Ok(ApartmentRepository::new(self.db)
            .upsert_many(apartments)
            .await?)
    }

    /// Get an apartment by id, failing with [`DataError::ObjectNotFound`] when it does not exist
    pub async fn get_one_by_id(&self, id: i32) -> Result<ApartmentFullDto, Error> {
        let apartment = ApartmentRepository::new(self.db)
            .get_one_full_by_id(id)
            .await?
            .ok_or(DataError::ObjectNotFound)?;

        Ok(apartment)
    }

    /// Same as [`Self::get_one_by_id`] using a filtered select
    pub async fn select_one_by_id(&self, id: i32) -> Result<ApartmentFullDto, Error> {
        let apartment = ApartmentRepository::new(self.db)
            .select_one_full_by_id(id)
            .await?
            .ok_or(DataError::ObjectNotFound)?;

        Ok(apartment)
    }

    /// All apartments ordered by id
    pub async fn get_all_full(&self) -> Result<Vec<ApartmentFullDto>, Error> {
        Ok(ApartmentRepository::new(self.db).select_all_full().await?)
    }

    /// All apartments in their short form, ordered by id
    pub async fn get_all_short(&self) -> Result<Vec<ApartmentDto>, Error> {
        Ok(ApartmentRepository::new(self.db).select_all_short().await?)
    }

    /// Deletes one apartment, `deleted` is false when it did not exist
    pub async fn delete(&self, id: i32) -> Result<DeleteStatusDto, Error> {
        let deleted = ApartmentRepository::new(self.db).delete(id).await?;

        Ok(DeleteStatusDto { deleted })
    }

    /// Deletes apartments by id, `deleted` is false unless every id was removed
    pub async fn delete_many(&self, ids: Vec<i32>) -> Result<DeleteStatusDto, Error> {
        let deleted = ApartmentRepository::new(self.db).delete_many(ids).await?;

        Ok(DeleteStatusDto { deleted })
    }

    /// Apartments with unpaid bills, `None` or `0` selects every building
    pub async fn get_apartments_full_data_with_debt(
        &self,
        building_id: Option<i32>,
    ) -> Result<Vec<ApartmentWithDebtDto>, Error> {
        Ok(ApartmentRepository::new(self.db)
            .get_apartments_full_data_with_debt(building_id)
            .await?)
    }

    /// First apartment with unpaid bills matching the number within a building
    pub async fn get_apartments_full_data_with_debt_by_apart_id(
        &self,
        apartment_number: i32,
        building_id: i32,
    ) -> Result<Option<ApartmentWithDebtDto>, Error> {
        Ok(ApartmentRepository::new(self.db)
            .get_apartments_full_data_with_debt_by_apart_id(apartment_number, building_id)
            .await?)
    }

    /// Apartments with unpaid bills, `None` or an empty name selects every project
    pub async fn get_apartments_full_data_with_debt_by_project_name(
        &self,
        project_name: Option<&str>,
    ) -> Result<Vec<ApartmentWithDebtDto>, Error> {
        Ok(ApartmentRepository::new(self.db)
            .get_apartments_full_data_with_debt_by_project_name(project_name)
            .await?)
    }
}
