use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "apartment_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub id_apartment: i32,
    pub room_number: i32,
    #[sea_orm(column_type = "Double")]
    pub common_square: f64,
    #[sea_orm(column_type = "Double")]
    pub kitchen_square: Option<f64>,
    pub balcony: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::apartment::Entity",
        from = "Column::IdApartment",
        to = "super::apartment::Column::Id",
        on_delete = "Cascade"
    )]
    Apartment,
}

impl Related<super::apartment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Apartment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
