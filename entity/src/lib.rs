//! sea-orm entities for the property management schema.

pub mod prelude;

pub mod apartment;
pub mod apartment_info;
pub mod bill;
pub mod building;
pub mod owner;
pub mod users;
