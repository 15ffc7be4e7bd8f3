pub use super::apartment::Entity as Apartment;
pub use super::apartment_info::Entity as ApartmentInfo;
pub use super::bill::Entity as Bill;
pub use super::building::Entity as Building;
pub use super::owner::Entity as Owner;
pub use super::users::Entity as Users;
