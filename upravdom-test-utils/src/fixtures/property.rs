//! Property database insertion utilities.
//!
//! Each helper inserts a single record with standard test values and returns the stored model,
//! so tests only spell out the fields they care about.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn property(&self) -> PropertyFixtures<'_> {
        PropertyFixtures { setup: self }
    }
}

pub struct PropertyFixtures<'a> {
    pub setup: &'a TestContext,
}

impl<'a> PropertyFixtures<'a> {
    /// Insert a building with the given address.
    ///
    /// The building gets 9 floors, 2 lifts and the project name `"П-44"`.
    pub async fn insert_building(
        &self,
        address: &str,
    ) -> Result<entity::building::Model, TestError> {
        self.insert_building_with_project(address, "П-44").await
    }

    /// Insert a building with the given address and project name.
    pub async fn insert_building_with_project(
        &self,
        address: &str,
        project_name: &str,
    ) -> Result<entity::building::Model, TestError> {
        Ok(
            entity::prelude::Building::insert(entity::building::ActiveModel {
                address: ActiveValue::Set(address.to_string()),
                floors_number: ActiveValue::Set(9),
                lift_number: ActiveValue::Set(2),
                project_name: ActiveValue::Set(project_name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an owner with the given full name and phone number.
    pub async fn insert_owner(
        &self,
        fullname: &str,
        phone: &str,
    ) -> Result<entity::owner::Model, TestError> {
        Ok(
            entity::prelude::Owner::insert(entity::owner::ActiveModel {
                fullname: ActiveValue::Set(fullname.to_string()),
                passport_series: ActiveValue::Set("4510".to_string()),
                passport_values: ActiveValue::Set("123456".to_string()),
                phone: ActiveValue::Set(phone.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an apartment on the 1st floor with number 1.
    ///
    /// # Arguments
    /// - `id_building` - Building the apartment belongs to, must already exist
    /// - `id_owner` - Optional owner, must already exist when provided
    /// - `utility_account` - Utility account, unique within the building
    pub async fn insert_apartment(
        &self,
        id_building: i32,
        id_owner: Option<i32>,
        utility_account: &str,
    ) -> Result<entity::apartment::Model, TestError> {
        Ok(
            entity::prelude::Apartment::insert(entity::apartment::ActiveModel {
                id_building: ActiveValue::Set(id_building),
                id_owner: ActiveValue::Set(id_owner),
                utility_account: ActiveValue::Set(utility_account.to_string()),
                apartment_number: ActiveValue::Set(1),
                floor: ActiveValue::Set(1),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a two room apartment detail record of 54.5 m².
    pub async fn insert_apartment_info(
        &self,
        id_apartment: i32,
    ) -> Result<entity::apartment_info::Model, TestError> {
        Ok(
            entity::prelude::ApartmentInfo::insert(entity::apartment_info::ActiveModel {
                id_apartment: ActiveValue::Set(id_apartment),
                room_number: ActiveValue::Set(2),
                common_square: ActiveValue::Set(54.5),
                kitchen_square: ActiveValue::Set(Some(9.0)),
                balcony: ActiveValue::Set(Some(true)),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a bill for an apartment.
    pub async fn insert_bill(
        &self,
        id_apartment: i32,
        bill_period: &str,
        bill_size: f64,
        is_paid: bool,
    ) -> Result<entity::bill::Model, TestError> {
        Ok(
            entity::prelude::Bill::insert(entity::bill::ActiveModel {
                id_apartment: ActiveValue::Set(id_apartment),
                bill_period: ActiveValue::Set(bill_period.to_string()),
                bill_size: ActiveValue::Set(bill_size),
                is_paid: ActiveValue::Set(is_paid),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
