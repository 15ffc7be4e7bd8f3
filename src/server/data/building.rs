use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, TransactionSession, TransactionTrait,
};

use crate::{
    model::{
        apartment::ApartmentFullDto,
        building::{BuildingDto, BuildingFullDto},
    },
    server::data::{
        apartment::apartment_full_dto,
        util::{id_value, is_exact_count, requested_id},
    },
};

pub struct BuildingRepository<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> BuildingRepository<'a, C> {
    /// Creates a new instance of [`BuildingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a building, or updates it when its id names an existing row
    pub async fn upsert(&self, building: BuildingDto) -> Result<BuildingFullDto, DbErr> {
        let txn = self.db.begin().await?;

        let model = upsert_building(&txn, building).await?;
        let mut apartments = apartments_by_building(&txn, vec![model.id]).await?;

        txn.commit().await?;

        tracing::debug!(building_id = model.id, "Upserted building");

        let building_apartments = apartments.remove(&model.id).unwrap_or_default();
        Ok(full_dto(model, building_apartments))
    }

    /// Upserts all buildings in one transaction, nothing is stored if any of them fails
    pub async fn upsert_many(
        &self,
        buildings: Vec<BuildingDto>,
    ) -> Result<Vec<BuildingFullDto>, DbErr> {
        let txn = self.db.begin().await?;

        let mut models = Vec::with_capacity(buildings.len());
        for building in buildings {
            models.push(upsert_building(&txn, building).await?);
        }
        let full = load_full(&txn, models).await?;

        txn.commit().await?;

        tracing::debug!(count = full.len(), "Upserted buildings");

        Ok(full)
    }

    /// Get a building with its apartments by primary key
    pub async fn get_one_full_by_id(&self, id: i32) -> Result<Option<BuildingFullDto>, DbErr> {
        let Some(model) = entity::prelude::Building::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(load_full(self.db, vec![model]).await?.into_iter().next())
    }

    /// Select a building with its apartments with an explicit `WHERE id = ?` filter
    pub async fn select_one_full_by_id(&self, id: i32) -> Result<Option<BuildingFullDto>, DbErr> {
        let Some(model) = entity::prelude::Building::find()
            .filter(entity::building::Column::Id.eq(id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(load_full(self.db, vec![model]).await?.into_iter().next())
    }

    /// Select all buildings with their apartments, ordered by id
    pub async fn select_all_full(&self) -> Result<Vec<BuildingFullDto>, DbErr> {
        let models = entity::prelude::Building::find()
            .order_by_asc(entity::building::Column::Id)
            .all(self.db)
            .await?;

        load_full(self.db, models).await
    }

    /// Select all buildings without their apartments, ordered by id
    pub async fn select_all_short(&self) -> Result<Vec<BuildingDto>, DbErr> {
        Ok(entity::prelude::Building::find()
            .order_by_asc(entity::building::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(BuildingDto::from)
            .collect())
    }

    /// Deletes a building together with its apartments and their detail records
    ///
    /// Returns `true` when the building existed. Fails with a foreign key violation when one of
    /// its apartments still has bills, in which case nothing is deleted.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        self.delete_many(vec![id]).await
    }

    /// Deletes buildings together with their apartments and their detail records
    ///
    /// Returns `true` only when every requested building was removed. Existing buildings are
    /// removed either way.
    pub async fn delete_many(&self, ids: Vec<i32>) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let apartment_ids: Vec<i32> = entity::prelude::Apartment::find()
            .filter(entity::apartment::Column::IdBuilding.is_in(ids.clone()))
            .all(&txn)
            .await?
            .into_iter()
            .map(|apartment| apartment.id)
            .collect();

        if !apartment_ids.is_empty() {
            entity::prelude::ApartmentInfo::delete_many()
                .filter(entity::apartment_info::Column::IdApartment.is_in(apartment_ids.clone()))
                .exec(&txn)
                .await?;

            entity::prelude::Apartment::delete_many()
                .filter(entity::apartment::Column::Id.is_in(apartment_ids.clone()))
                .exec(&txn)
                .await?;
        }

        let result = entity::prelude::Building::delete_many()
            .filter(entity::building::Column::Id.is_in(ids.clone()))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            requested = ids.len(),
            deleted = result.rows_affected,
            apartments = apartment_ids.len(),
            "Deleted buildings"
        );

        Ok(is_exact_count(result.rows_affected, ids.len()))
    }
}

async fn upsert_building<C: ConnectionTrait>(
    db: &C,
    building: BuildingDto,
) -> Result<entity::building::Model, DbErr> {
    let exists = match requested_id(building.id) {
        Some(id) => entity::prelude::Building::find_by_id(id)
            .one(db)
            .await?
            .is_some(),
        None => false,
    };

    let model = entity::building::ActiveModel {
        id: id_value(building.id),
        address: ActiveValue::Set(building.address),
        floors_number: ActiveValue::Set(building.floors_number),
        lift_number: ActiveValue::Set(building.lift_number),
        project_name: ActiveValue::Set(building.project_name),
    };

    if exists {
        model.update(db).await
    } else {
        model.insert(db).await
    }
}

/// Attaches apartments with their detail records to buildings, keeping the building order
async fn load_full<C: ConnectionTrait>(
    db: &C,
    buildings: Vec<entity::building::Model>,
) -> Result<Vec<BuildingFullDto>, DbErr> {
    let mut apartments =
        apartments_by_building(db, buildings.iter().map(|b| b.id).collect()).await?;

    Ok(buildings
        .into_iter()
        .map(|building| {
            let building_apartments = apartments.remove(&building.id).unwrap_or_default();
            full_dto(building, building_apartments)
        })
        .collect())
}

async fn apartments_by_building<C: ConnectionTrait>(
    db: &C,
    building_ids: Vec<i32>,
) -> Result<HashMap<i32, Vec<ApartmentFullDto>>, DbErr> {
    let mut apartments: HashMap<i32, Vec<ApartmentFullDto>> = HashMap::new();
    if building_ids.is_empty() {
        return Ok(apartments);
    }

    for (apartment, info) in entity::prelude::Apartment::find()
        .find_also_related(entity::prelude::ApartmentInfo)
        .filter(entity::apartment::Column::IdBuilding.is_in(building_ids))
        .order_by_asc(entity::apartment::Column::Id)
        .all(db)
        .await?
    {
        apartments
            .entry(apartment.id_building)
            .or_default()
            .push(apartment_full_dto(apartment, info));
    }

    Ok(apartments)
}

fn full_dto(
    building: entity::building::Model,
    apartments: Vec<ApartmentFullDto>,
) -> BuildingFullDto {
    BuildingFullDto {
        id: Some(building.id),
        address: building.address,
        floors_number: building.floors_number,
        lift_number: building.lift_number,
        project_name: building.project_name,
        apartments,
    }
}

impl From<entity::building::Model> for BuildingDto {
    fn from(building: entity::building::Model) -> Self {
        Self {
            id: Some(building.id),
            address: building.address,
            floors_number: building.floors_number,
            lift_number: building.lift_number,
            project_name: building.project_name,
        }
    }
}
