use sea_orm::entity::prelude::*;

/// An apartment is unique per `(id_building, utility_account)`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "apartment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub id_building: i32,
    #[sea_orm(indexed)]
    pub id_owner: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub utility_account: String,
    pub apartment_number: i32,
    pub floor: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::building::Entity",
        from = "Column::IdBuilding",
        to = "super::building::Column::Id",
        on_delete = "Cascade"
    )]
    Building,
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::IdOwner",
        to = "super::owner::Column::Id",
        on_delete = "SetNull"
    )]
    Owner,
    #[sea_orm(has_one = "super::apartment_info::Entity")]
    ApartmentInfo,
    #[sea_orm(has_many = "super::bill::Entity")]
    Bill,
}

impl Related<super::building::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Building.def()
    }
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::apartment_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApartmentInfo.def()
    }
}

impl Related<super::bill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bill.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
