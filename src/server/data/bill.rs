use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, TransactionSession, TransactionTrait,
};

use crate::{
    model::bill::BillDto,
    server::data::util::{id_value, is_exact_count, requested_id},
};

pub struct BillRepository<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> BillRepository<'a, C> {
    /// Creates a new instance of [`BillRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a bill, or updates it when its id names an existing row
    pub async fn upsert(&self, bill: BillDto) -> Result<BillDto, DbErr> {
        let txn = self.db.begin().await?;

        let model = upsert_bill(&txn, bill).await?;

        txn.commit().await?;

        tracing::debug!(bill_id = model.id, "Upserted bill");

        Ok(BillDto::from(model))
    }

    /// Upserts all bills in one transaction, nothing is stored if any of them fails
    pub async fn upsert_many(&self, bills: Vec<BillDto>) -> Result<Vec<BillDto>, DbErr> {
        let txn = self.db.begin().await?;

        let mut stored = Vec::with_capacity(bills.len());
        for bill in bills {
            stored.push(BillDto::from(upsert_bill(&txn, bill).await?));
        }

        txn.commit().await?;

        tracing::debug!(count = stored.len(), "Upserted bills");

        Ok(stored)
    }

    /// Get a bill by primary key
    pub async fn get_one_full_by_id(&self, id: i32) -> Result<Option<BillDto>, DbErr> {
        Ok(entity::prelude::Bill::find_by_id(id)
            .one(self.db)
            .await?
            .map(BillDto::from))
    }

    /// Select a bill with an explicit `WHERE id = ?` filter
    pub async fn select_one_full_by_id(&self, id: i32) -> Result<Option<BillDto>, DbErr> {
        Ok(entity::prelude::Bill::find()
            .filter(entity::bill::Column::Id.eq(id))
            .one(self.db)
            .await?
            .map(BillDto::from))
    }

    /// Select all bills, ordered by id
    pub async fn select_all_full(&self) -> Result<Vec<BillDto>, DbErr> {
        Ok(entity::prelude::Bill::find()
            .order_by_asc(entity::bill::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(BillDto::from)
            .collect())
    }

    /// Bills have a single projection, this is the same as [`Self::select_all_full`]
    pub async fn select_all_short(&self) -> Result<Vec<BillDto>, DbErr> {
        self.select_all_full().await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        self.delete_many(vec![id]).await
    }

    /// Returns `true` only when every requested bill was removed
    pub async fn delete_many(&self, ids: Vec<i32>) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::Bill::delete_many()
            .filter(entity::bill::Column::Id.is_in(ids.clone()))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            requested = ids.len(),
            deleted = result.rows_affected,
            "Deleted bills"
        );

        Ok(is_exact_count(result.rows_affected, ids.len()))
    }
}

async fn upsert_bill<C: ConnectionTrait>(
    db: &C,
    bill: BillDto,
) -> Result<entity::bill::Model, DbErr> {
    let exists = match requested_id(bill.id) {
        Some(id) => entity::prelude::Bill::find_by_id(id)
            .one(db)
            .await?
            .is_some(),
        None => false,
    };

    let model = entity::bill::ActiveModel {
        id: id_value(bill.id),
        id_apartment: ActiveValue::Set(bill.id_apartment),
        bill_period: ActiveValue::Set(bill.bill_period),
        bill_size: ActiveValue::Set(bill.bill_size),
        is_paid: ActiveValue::Set(bill.is_paid),
    };

    if exists {
        model.update(db).await
    } else {
        model.insert(db).await
    }
}

impl From<entity::bill::Model> for BillDto {
    fn from(bill: entity::bill::Model) -> Self {
        Self {
            id: Some(bill.id),
            id_apartment: bill.id_apartment,
            bill_period: bill.bill_period,
            bill_size: bill.bill_size,
            is_paid: bill.is_paid,
        }
    }
}

#[cfg(test)]
mod tests {
    use upravdom_test_utils::prelude::*;

    use crate::{model::bill::BillDto, server::data::bill::BillRepository};

    fn new_bill(id_apartment: i32, bill_period: &str, bill_size: f64) -> BillDto {
        BillDto {
            id: None,
            id_apartment,
            bill_period: bill_period.to_string(),
            bill_size,
            is_paid: false,
        }
    }

    mod upsert {
        use super::*;

        /// Expect a new row when the DTO has no id
        #[tokio::test]
        async fn inserts_without_id() -> Result<(), TestError> {
            let test = TestBuilder::new().with_property_tables().build().await?;
            let building = test.property().insert_building("ул. Мира, 1").await?;
            let apartment = test
                .property()
                .insert_apartment(building.id, None, "100")
                .await?;

            let bill_repository = BillRepository::new(&test.db);
            let result = bill_repository
                .upsert(new_bill(apartment.id, "2024-01", 1500.5))
                .await;

            assert!(result.is_ok(), "Error: {:?}", result);
            let stored = result.unwrap();
            assert!(stored.id.is_some());
            assert_eq!(stored.bill_size, 1500.5);

            Ok(())
        }

        /// Expect the existing row to be updated when the DTO carries its id
        #[tokio::test]
        async fn updates_existing_row() -> Result<(), TestError> {
            let test = TestBuilder::new().with_property_tables().build().await?;
            let building = test.property().insert_building("ул. Мира, 1").await?;
            let apartment = test
                .property()
                .insert_apartment(building.id, None, "100")
                .await?;
            let bill = test
                .property()
                .insert_bill(apartment.id, "2024-01", 100.0, false)
                .await?;

            let bill_repository = BillRepository::new(&test.db);
            let updated = bill_repository
                .upsert(BillDto {
                    id: Some(bill.id),
                    is_paid: true,
                    ..new_bill(apartment.id, "2024-01", 100.0)
                })
                .await
                .unwrap();

            assert_eq!(updated.id, Some(bill.id));
            assert!(updated.is_paid);
            assert_eq!(bill_repository.select_all_full().await?.len(), 1);

            Ok(())
        }

        /// Expect a foreign key error for a bill of a missing apartment
        #[tokio::test]
        async fn fails_for_missing_apartment() -> Result<(), TestError> {
            let test = TestBuilder::new().with_property_tables().build().await?;

            let bill_repository = BillRepository::new(&test.db);
            let result = bill_repository.upsert(new_bill(42, "2024-01", 10.0)).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod upsert_many {
        use super::*;

        /// Expect nothing to be stored when one bill of the batch fails
        #[tokio::test]
        async fn rolls_back_whole_batch() -> Result<(), TestError> {
            let test = TestBuilder::new().with_property_tables().build().await?;
            let building = test.property().insert_building("ул. Мира, 1").await?;
            let apartment = test
                .property()
                .insert_apartment(building.id, None, "100")
                .await?;

            let bill_repository = BillRepository::new(&test.db);
            let result = bill_repository
                .upsert_many(vec![
                    new_bill(apartment.id, "2024-01", 10.0),
                    new_bill(apartment.id + 100, "2024-02", 20.0),
                ])
                .await;

            assert!(result.is_err());
            assert!(bill_repository.select_all_full().await?.is_empty());

            Ok(())
        }
    }

    mod delete_many {
        use super::*;

        /// Expect false when only some ids exist, the existing rows are still removed
        #[tokio::test]
        async fn reports_partial_deletion() -> Result<(), TestError> {
            let test = TestBuilder::new().with_property_tables().build().await?;
            let building = test.property().insert_building("ул. Мира, 1").await?;
            let apartment = test
                .property()
                .insert_apartment(building.id, None, "100")
                .await?;
            let bill = test
                .property()
                .insert_bill(apartment.id, "2024-01", 10.0, false)
                .await?;

            let bill_repository = BillRepository::new(&test.db);
            let deleted = bill_repository.delete_many(vec![bill.id, bill.id + 1]).await?;

            assert!(!deleted);
            assert!(bill_repository.get_one_full_by_id(bill.id).await?.is_none());

            Ok(())
        }

        /// Expect true when every id exists
        #[tokio::test]
        async fn reports_full_deletion() -> Result<(), TestError> {
            let test = TestBuilder::new().with_property_tables().build().await?;
            let building = test.property().insert_building("ул. Мира, 1").await?;
            let apartment = test
                .property()
                .insert_apartment(building.id, None, "100")
                .await?;
            let first = test
                .property()
                .insert_bill(apartment.id, "2024-01", 10.0, false)
                .await?;
            let second = test
                .property()
                .insert_bill(apartment.id, "2024-02", 10.0, true)
                .await?;

            let bill_repository = BillRepository::new(&test.db);

            assert!(bill_repository.delete_many(vec![first.id, second.id]).await?);

            Ok(())
        }
    }
}
