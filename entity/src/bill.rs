use sea_orm::entity::prelude::*;

/// Bills are never removed by a cascade from their apartment.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bill")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub id_apartment: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub bill_period: String,
    #[sea_orm(column_type = "Double")]
    pub bill_size: f64,
    pub is_paid: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::apartment::Entity",
        from = "Column::IdApartment",
        to = "super::apartment::Column::Id"
    )]
    Apartment,
}

impl Related<super::apartment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Apartment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
