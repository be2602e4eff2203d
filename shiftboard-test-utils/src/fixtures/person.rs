use std::sync::LazyLock;

use argon2::{password_hash::SaltString, Algorithm, Argon2, Params, PasswordHasher, Version};
use chrono::Utc;
use entity::person::Title;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

/// Password of every account inserted by [`PersonFixtures`]
pub const TEST_PASSWORD: &str = "password";

/// Stored hash of [`TEST_PASSWORD`], Argon2id at minimum cost over a fixed salt
static TEST_PASSWORD_HASH: LazyLock<String> = LazyLock::new(|| {
    let params = Params::new(
        Params::MIN_M_COST,
        Params::MIN_T_COST,
        Params::MIN_P_COST,
        None,
    )
    .expect("minimum Argon2 parameters are valid");
    let salt = SaltString::encode_b64(b"shiftboard-test!").expect("fixed salt is valid");

    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(TEST_PASSWORD.as_bytes(), &salt)
        .expect("test password hashes")
        .to_string()
});

impl TestContext {
    pub fn person<'a>(&'a self) -> PersonFixtures<'a> {
        PersonFixtures { test: self }
    }
}

pub struct PersonFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> PersonFixtures<'a> {
    /// Inserts an account that logs in with [`TEST_PASSWORD`]
    pub async fn insert_account(
        &self,
        username: &str,
        is_superuser: bool,
    ) -> Result<entity::account::Model, TestError> {
        Ok(
            entity::prelude::Account::insert(entity::account::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
                is_superuser: ActiveValue::Set(is_superuser),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Inserts a group granting the given permission codenames
    pub async fn insert_group(
        &self,
        name: &str,
        permissions: &[&str],
    ) -> Result<entity::account_group::Model, TestError> {
        let group = entity::prelude::AccountGroup::insert(entity::account_group::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?;

        for permission in permissions {
            entity::prelude::GroupPermission::insert(entity::group_permission::ActiveModel {
                group_id: ActiveValue::Set(group.id),
                permission: ActiveValue::Set(permission.to_string()),
                ..Default::default()
            })
            .exec(&self.test.db)
            .await?;
        }

        Ok(group)
    }

    pub async fn insert_membership(
        &self,
        account_id: i32,
        group_id: i32,
    ) -> Result<entity::account_group_membership::Model, TestError> {
        Ok(entity::prelude::AccountGroupMembership::insert(
            entity::account_group_membership::ActiveModel {
                account_id: ActiveValue::Set(account_id),
                group_id: ActiveValue::Set(group_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.test.db)
        .await?)
    }

    /// Inserts an account holding exactly `permissions` through a group named after it
    pub async fn insert_account_with_permissions(
        &self,
        username: &str,
        permissions: &[&str],
    ) -> Result<entity::account::Model, TestError> {
        let account = self.insert_account(username, false).await?;
        let group = self
            .insert_group(&format!("{}-group", username), permissions)
            .await?;
        self.insert_membership(account.id, group.id).await?;

        Ok(account)
    }

    pub async fn insert_person(
        &self,
        name: &str,
        title: Title,
        account_id: Option<i32>,
    ) -> Result<entity::person::Model, TestError> {
        Ok(entity::prelude::Person::insert(entity::person::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            name: ActiveValue::Set(name.to_string()),
            title: ActiveValue::Set(title),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_person_with_account(
        &self,
        username: &str,
        name: &str,
        title: Title,
    ) -> Result<(entity::account::Model, entity::person::Model), TestError> {
        let account = self.insert_account(username, false).await?;
        let person = self.insert_person(name, title, Some(account.id)).await?;

        Ok((account, person))
    }
}
