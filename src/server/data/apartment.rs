use std::collections::HashMap;

use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionSession, TransactionTrait,
};

use crate::{
    model::{
        apartment::{ApartmentDto, ApartmentFullDto, ApartmentInfoDto, ApartmentWithDebtDto},
        bill::BillDto,
        building::BuildingDto,
        owner::OwnerDto,
    },
    server::data::util::{id_value, is_exact_count, requested_id},
};

pub struct ApartmentRepository<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> ApartmentRepository<'a, C> {
    /// Creates a new instance of [`ApartmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an apartment, or updates it when its id names an existing row
    ///
    /// The detail record, when present, is stored in the same transaction. An apartment keeps at
    /// most one detail record, so an existing record is updated even if the DTO carries no id.
    pub async fn upsert(&self, apartment: ApartmentFullDto) -> Result<ApartmentFullDto, DbErr> {
        let txn = self.db.begin().await?;

        let full = upsert_apartment(&txn, apartment).await?;

        txn.commit().await?;

        tracing::debug!(apartment_id = ?full.id, "Upserted apartment");

        Ok(full)
    }

    /// Upserts all apartments in one transaction, nothing is stored if any of them fails
    pub async fn upsert_many(
        &self,
        apartments: Vec<ApartmentFullDto>,
    ) -> Result<Vec<ApartmentFullDto>, DbErr> {
        let txn = self.db.begin().await?;

        let mut stored = Vec::with_capacity(apartments.len());
        for apartment in apartments {
            stored.push(upsert_apartment(&txn, apartment).await?);
        }

        txn.commit().await?;

        tracing::debug!(count = stored.len(), "Upserted apartments");

        Ok(stored)
    }

    /// Get an apartment with its detail record by primary key
    pub async fn get_one_full_by_id(&self, id: i32) -> Result<Option<ApartmentFullDto>, DbErr> {
        Ok(entity::prelude::Apartment::find_by_id(id)
            .find_also_related(entity::prelude::ApartmentInfo)
            .one(self.db)
            .await?
            .map(|(apartment, info)| apartment_full_dto(apartment, info)))
    }

    /// Select an apartment with its detail record with an explicit `WHERE id = ?` filter
    pub async fn select_one_full_by_id(
        &self,
        id: i32,
    ) -> Result<Option<ApartmentFullDto>, DbErr> {
        Ok(entity::prelude::Apartment::find()
            .find_also_related(entity::prelude::ApartmentInfo)
            .filter(entity::apartment::Column::Id.eq(id))
            .one(self.db)
            .await?
            .map(|(apartment, info)| apartment_full_dto(apartment, info)))
    }

    /// Select all apartments with their detail records, ordered by id
    pub async fn select_all_full(&self) -> Result<Vec<ApartmentFullDto>, DbErr> {
        Ok(entity::prelude::Apartment::find()
            .find_also_related(entity::prelude::ApartmentInfo)
            .order_by_asc(entity::apartment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(apartment, info)| apartment_full_dto(apartment, info))
            .collect())
    }

    /// Select all apartments without detail records, ordered by id
    pub async fn select_all_short(&self) -> Result<Vec<ApartmentDto>, DbErr> {
        Ok(entity::prelude::Apartment::find()
            .order_by_asc(entity::apartment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(ApartmentDto::from)
            .collect())
    }

    /// Deletes an apartment and its detail record
    ///
    /// The owner is left untouched. Fails with a foreign key violation while the apartment
    /// still has bills.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        self.delete_many(vec![id]).await
    }

    /// Deletes apartments and their detail records
    ///
    /// Returns `true` only when every requested apartment was removed.
    pub async fn delete_many(&self, ids: Vec<i32>) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::ApartmentInfo::delete_many()
            .filter(entity::apartment_info::Column::IdApartment.is_in(ids.clone()))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Apartment::delete_many()
            .filter(entity::apartment::Column::Id.is_in(ids.clone()))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            requested = ids.len(),
            deleted = result.rows_affected,
            "Deleted apartments"
        );

        Ok(is_exact_count(result.rows_affected, ids.len()))
    }

    /// Apartments with at least one unpaid bill, optionally restricted to one building
    ///
    /// `None` and `Some(0)` select every building.
    pub async fn get_apartments_full_data_with_debt(
        &self,
        building_id: Option<i32>,
    ) -> Result<Vec<ApartmentWithDebtDto>, DbErr> {
        let mut condition = Condition::all();
        if let Some(building_id) = building_id.filter(|id| *id != 0) {
            condition = condition.add(entity::apartment::Column::IdBuilding.eq(building_id));
        }

        self.select_with_debt(condition).await
    }

    /// The first apartment with the given number in a building, if it has unpaid bills
    pub async fn get_apartments_full_data_with_debt_by_apart_id(
        &self,
        apartment_number: i32,
        building_id: i32,
    ) -> Result<Option<ApartmentWithDebtDto>, DbErr> {
        let condition = Condition::all()
            .add(entity::apartment::Column::ApartmentNumber.eq(apartment_number))
            .add(entity::apartment::Column::IdBuilding.eq(building_id));

        Ok(self.select_with_debt(condition).await?.into_iter().next())
    }

    /// Apartments with at least one unpaid bill in buildings of a residential complex
    ///
    /// The project name must match exactly, case included. `None` and an empty name select
    /// every project.
    pub async fn get_apartments_full_data_with_debt_by_project_name(
        &self,
        project_name: Option<&str>,
    ) -> Result<Vec<ApartmentWithDebtDto>, DbErr> {
        let mut condition = Condition::all();
        if let Some(project_name) = project_name.filter(|name| !name.is_empty()) {
            condition = condition.add(entity::building::Column::ProjectName.eq(project_name));
        }

        self.select_with_debt(condition).await
    }

    async fn select_with_debt(
        &self,
        condition: Condition,
    ) -> Result<Vec<ApartmentWithDebtDto>, DbErr> {
        let unpaid = Query::select()
            .column(entity::bill::Column::IdApartment)
            .from(entity::bill::Entity)
            .and_where(entity::bill::Column::IsPaid.eq(false))
            .to_owned();

        let apartments = entity::prelude::Apartment::find()
            .find_also_related(entity::prelude::Building)
            .filter(entity::apartment::Column::Id.in_subquery(unpaid))
            .filter(condition)
            .order_by_asc(entity::apartment::Column::Id)
            .all(self.db)
            .await?;

        if apartments.is_empty() {
            return Ok(Vec::new());
        }

        let apartment_ids: Vec<i32> = apartments.iter().map(|(a, _)| a.id).collect();
        let owner_ids: Vec<i32> = apartments.iter().filter_map(|(a, _)| a.id_owner).collect();

        let mut owners: HashMap<i32, entity::owner::Model> = HashMap::new();
        if !owner_ids.is_empty() {
            owners = entity::prelude::Owner::find()
                .filter(entity::owner::Column::Id.is_in(owner_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|owner| (owner.id, owner))
                .collect();
        }

        let mut infos: HashMap<i32, entity::apartment_info::Model> =
            entity::prelude::ApartmentInfo::find()
                .filter(entity::apartment_info::Column::IdApartment.is_in(apartment_ids.clone()))
                .order_by_asc(entity::apartment_info::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(|info| (info.id_apartment, info))
                .collect();

        let mut bills: HashMap<i32, Vec<BillDto>> = HashMap::new();
        for bill in entity::prelude::Bill::find()
            .filter(entity::bill::Column::IdApartment.is_in(apartment_ids))
            .filter(entity::bill::Column::IsPaid.eq(false))
            .order_by_asc(entity::bill::Column::Id)
            .all(self.db)
            .await?
        {
            bills
                .entry(bill.id_apartment)
                .or_default()
                .push(BillDto::from(bill));
        }

        tracing::debug!(count = apartments.len(), "Selected apartments with debt");

        Ok(apartments
            .into_iter()
            .map(|(apartment, building)| ApartmentWithDebtDto {
                apartment_info: infos.remove(&apartment.id).map(ApartmentInfoDto::from),
                building: building.map(BuildingDto::from),
                owner: apartment
                    .id_owner
                    .and_then(|id| owners.get(&id).cloned())
                    .map(OwnerDto::from),
                bills: bills.remove(&apartment.id).unwrap_or_default(),
                utility_account: apartment.utility_account,
                apartment_number: apartment.apartment_number,
                floor: apartment.floor,
            })
            .collect())
    }
}

async fn upsert_apartment<C: ConnectionTrait>(
    db: &C,
    apartment: ApartmentFullDto,
) -> Result<ApartmentFullDto, DbErr> {
    let exists = match requested_id(apartment.id) {
        Some(id) => entity::prelude::Apartment::find_by_id(id)
            .one(db)
            .await?
            .is_some(),
        None => false,
    };

    let model = entity::apartment::ActiveModel {
        id: id_value(apartment.id),
        id_building: ActiveValue::Set(apartment.id_building),
        id_owner: ActiveValue::Set(apartment.id_owner),
        utility_account: ActiveValue::Set(apartment.utility_account),
        apartment_number: ActiveValue::Set(apartment.apartment_number),
        floor: ActiveValue::Set(apartment.floor),
    };

    let stored = if exists {
        model.update(db).await?
    } else {
        model.insert(db).await?
    };

    let info = match apartment.apartment_info {
        Some(info) => Some(upsert_apartment_info(db, stored.id, info).await?),
        None => {
            entity::prelude::ApartmentInfo::find()
                .filter(entity::apartment_info::Column::IdApartment.eq(stored.id))
                .one(db)
                .await?
        }
    };

    Ok(apartment_full_dto(stored, info))
}

/// Writes the detail record of an apartment, keeping at most one per apartment.
///
/// The apartment's own record is always the one updated. A requested info id is only used for a
/// new record and only when no other apartment holds it.
async fn upsert_apartment_info<C: ConnectionTrait>(
    db: &C,
    id_apartment: i32,
    info: ApartmentInfoDto,
) -> Result<entity::apartment_info::Model, DbErr> {
    let own = entity::prelude::ApartmentInfo::find()
        .filter(entity::apartment_info::Column::IdApartment.eq(id_apartment))
        .one(db)
        .await?;

    let (id, exists) = match own {
        Some(own) => (ActiveValue::Set(own.id), true),
        None => {
            let free_id = match requested_id(info.id) {
                Some(id) => entity::prelude::ApartmentInfo::find_by_id(id)
                    .one(db)
                    .await?
                    .is_none()
                    .then_some(id),
                None => None,
            };
            (id_value(free_id), false)
        }
    };

    let model = entity::apartment_info::ActiveModel {
        id,
        id_apartment: ActiveValue::Set(id_apartment),
        room_number: ActiveValue::Set(info.room_number),
        common_square: ActiveValue::Set(info.common_square),
        kitchen_square: ActiveValue::Set(info.kitchen_square),
        balcony: ActiveValue::Set(info.balcony),
    };

    if exists {
        model.update(db).await
    } else {
        model.insert(db).await
    }
}

/// Full projection of an apartment and its optional detail record
pub(crate) fn apartment_full_dto(
    apartment: entity::apartment::Model,
    info: Option<entity::apartment_info::Model>,
) -> ApartmentFullDto {
    ApartmentFullDto {
        id: Some(apartment.id),
        utility_account: apartment.utility_account,
        apartment_number: apartment.apartment_number,
        floor: apartment.floor,
        id_building: apartment.id_building,
        id_owner: apartment.id_owner,
        apartment_info: info.map(ApartmentInfoDto::from),
    }
}

impl From<entity::apartment::Model> for ApartmentDto {
    fn from(apartment: entity::apartment::Model) -> Self {
        Self {
            id: Some(apartment.id),
            utility_account: apartment.utility_account,
            apartment_number: apartment.apartment_number,
            floor: apartment.floor,
            id_building: apartment.id_building,
            id_owner: apartment.id_owner,
        }
    }
}

impl From<entity::apartment_info::Model> for ApartmentInfoDto {
    fn from(info: entity::apartment_info::Model) -> Self {
        Self {
            id: Some(info.id),
            room_number: info.room_number,
            common_square: info.common_square,
            kitchen_square: info.kitchen_square,
            balcony: info.balcony,
        }
    }
}
