pub use sea_orm_migration::prelude::*;

mod m20250301_000001_building;
mod m20250301_000002_owner;
mod m20250301_000003_apartment;
mod m20250301_000004_apartment_info;
mod m20250301_000005_bill;
mod m20250301_000006_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_building::Migration),
            Box::new(m20250301_000002_owner::Migration),
            Box::new(m20250301_000003_apartment::Migration),
            Box::new(m20250301_000004_apartment_info::Migration),
            Box::new(m20250301_000005_bill::Migration),
            Box::new(m20250301_000006_users::Migration),
        ]
    }
}
