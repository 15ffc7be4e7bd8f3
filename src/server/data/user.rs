use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get a user by login
    pub async fn get_by_login(&self, login: &str) -> Result<Option<entity::users::Model>, DbErr> {
        entity::prelude::Users::find()
            .filter(entity::users::Column::Login.eq(login))
            .one(self.db)
            .await
    }

    /// Stores a user with an already hashed password
    pub async fn create(
        &self,
        login: &str,
        hashed_password: &str,
    ) -> Result<entity::users::Model, DbErr> {
        entity::users::ActiveModel {
            login: ActiveValue::Set(login.to_string()),
            hashed_password: ActiveValue::Set(hashed_password.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
