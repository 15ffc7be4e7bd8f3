use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionSession, TransactionTrait,
};

use crate::{
    model::owner::{OwnerApartmentDto, OwnerDto, OwnerFullDto},
    server::data::util::{id_value, is_exact_count, requested_id},
};

pub struct OwnerRepository<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> OwnerRepository<'a, C> {
    /// Creates a new instance of [`OwnerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an owner, or updates it when its id names an existing row
    ///
    /// Returns the stored owner together with the apartments they already own.
    pub async fn upsert(&self, owner: OwnerDto) -> Result<OwnerFullDto, DbErr> {
        let txn = self.db.begin().await?;

        let model = upsert_owner(&txn, owner).await?;
        let full = load_full(&txn, model).await?;

        txn.commit().await?;

        tracing::debug!(owner_id = ?full.id, "Upserted owner");

        Ok(full)
    }

    /// Upserts all owners in one transaction, nothing is stored if any of them fails
    pub async fn upsert_many(&self, owners: Vec<OwnerDto>) -> Result<Vec<OwnerFullDto>, DbErr> {
        let txn = self.db.begin().await?;

        let mut stored = Vec::with_capacity(owners.len());
        for owner in owners {
            let model = upsert_owner(&txn, owner).await?;
            stored.push(load_full(&txn, model).await?);
        }

        txn.commit().await?;

        tracing::debug!(count = stored.len(), "Upserted owners");

        Ok(stored)
    }

    /// Get an owner with their apartments by primary key
    pub async fn get_one_full_by_id(&self, id: i32) -> Result<Option<OwnerFullDto>, DbErr> {
        match entity::prelude::Owner::find_by_id(id).one(self.db).await? {
            Some(model) => Ok(Some(load_full(self.db, model).await?)),
            None => Ok(None),
        }
    }

    /// Select an owner with their apartments with an explicit `WHERE id = ?` filter
    pub async fn select_one_full_by_id(&self, id: i32) -> Result<Option<OwnerFullDto>, DbErr> {
        Ok(entity::prelude::Owner::find()
            .filter(entity::owner::Column::Id.eq(id))
            .find_with_related(entity::prelude::Apartment)
            .all(self.db)
            .await?
            .into_iter()
            .next()
            .map(|(owner, apartments)| owner_full_dto(owner, apartments)))
    }

    /// Select all owners with their apartments, ordered by id
    pub async fn select_all_full(&self) -> Result<Vec<OwnerFullDto>, DbErr> {
        Ok(entity::prelude::Owner::find()
            .find_with_related(entity::prelude::Apartment)
            .order_by_asc(entity::owner::Column::Id)
            .order_by_asc(entity::apartment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(owner, apartments)| owner_full_dto(owner, apartments))
            .collect())
    }

    /// Select all owners without their apartments, ordered by id
    pub async fn select_all_short(&self) -> Result<Vec<OwnerDto>, DbErr> {
        Ok(entity::prelude::Owner::find()
            .order_by_asc(entity::owner::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(OwnerDto::from)
            .collect())
    }

    /// Deletes an owner, their apartments are kept without an owner
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        self.delete_many(vec![id]).await
    }

    /// Deletes owners, their apartments are kept without an owner
    ///
    /// Returns `true` only when every requested owner was removed.
    pub async fn delete_many(&self, ids: Vec<i32>) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let detached = entity::prelude::Apartment::update_many()
            .col_expr(
                entity::apartment::Column::IdOwner,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::apartment::Column::IdOwner.is_in(ids.clone()))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Owner::delete_many()
            .filter(entity::owner::Column::Id.is_in(ids.clone()))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            requested = ids.len(),
            deleted = result.rows_affected,
            detached_apartments = detached.rows_affected,
            "Deleted owners"
        );

        Ok(is_exact_count(result.rows_affected, ids.len()))
    }
}

async fn upsert_owner<C: ConnectionTrait>(
    db: &C,
    owner: OwnerDto,
) -> Result<entity::owner::Model, DbErr> {
    let exists = match requested_id(owner.id) {
        Some(id) => entity::prelude::Owner::find_by_id(id)
            .one(db)
            .await?
            .is_some(),
        None => false,
    };

    let model = entity::owner::ActiveModel {
        id: id_value(owner.id),
        fullname: ActiveValue::Set(owner.fullname),
        passport_series: ActiveValue::Set(owner.passport_series),
        passport_values: ActiveValue::Set(owner.passport_values),
        phone: ActiveValue::Set(owner.phone),
    };

    if exists {
        model.update(db).await
    } else {
        model.insert(db).await
    }
}

async fn load_full<C: ConnectionTrait>(
    db: &C,
    owner: entity::owner::Model,
) -> Result<OwnerFullDto, DbErr> {
    let apartments = entity::prelude::Apartment::find()
        .filter(entity::apartment::Column::IdOwner.eq(owner.id))
        .order_by_asc(entity::apartment::Column::Id)
        .all(db)
        .await?;

    Ok(owner_full_dto(owner, apartments))
}

fn owner_full_dto(
    owner: entity::owner::Model,
    apartments: Vec<entity::apartment::Model>,
) -> OwnerFullDto {
    OwnerFullDto {
        id: Some(owner.id),
        fullname: owner.fullname,
        passport_series: owner.passport_series,
        passport_values: owner.passport_values,
        phone: owner.phone,
        apartments: apartments
            .into_iter()
            .map(|apartment| OwnerApartmentDto {
                utility_account: apartment.utility_account,
                apartment_number: apartment.apartment_number,
                floor: apartment.floor,
            })
            .collect(),
    }
}

impl From<entity::owner::Model> for OwnerDto {
    fn from(owner: entity::owner::Model) -> Self {
        Self {
            id: Some(owner.id),
            fullname: owner.fullname,
            passport_series: owner.passport_series,
            passport_values: owner.passport_values,
            phone: owner.phone,
        }
    }
}
