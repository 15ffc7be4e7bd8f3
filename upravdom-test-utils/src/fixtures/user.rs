use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with an already hashed password.
    pub async fn insert_user(
        &self,
        login: &str,
        hashed_password: &str,
    ) -> Result<entity::users::Model, TestError> {
        Ok(
            entity::prelude::Users::insert(entity::users::ActiveModel {
                login: ActiveValue::Set(login.to_string()),
                hashed_password: ActiveValue::Set(hashed_password.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
