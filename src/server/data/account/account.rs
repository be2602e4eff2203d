use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new instance of [`AccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new account
    ///
    /// # Arguments
    /// - `username`: unique login name
    /// - `password_hash`: hash produced by
    ///   [`hash_password`](crate::server::util::password::hash_password)
    /// - `is_superuser`: whether the account holds every permission
    pub async fn create(
        &self,
        username: String,
        password_hash: String,
        is_superuser: bool,
    ) -> Result<entity::account::Model, DbErr> {
        let account = entity::account::ActiveModel {
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(password_hash),
            is_superuser: ActiveValue::Set(is_superuser),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        account.insert(self.db).await
    }

    pub async fn get_by_id(&self, account_id: i32) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Adds the account to every provided group
    pub async fn add_to_groups(&self, account_id: i32, group_ids: &[i32]) -> Result<(), DbErr> {
        if group_ids.is_empty() {
            return Ok(());
        }

        let memberships = group_ids
            .iter()
            .map(|group_id| entity::account_group_membership::ActiveModel {
                account_id: ActiveValue::Set(account_id),
                group_id: ActiveValue::Set(*group_id),
                ..Default::default()
            });

        entity::prelude::AccountGroupMembership::insert_many(memberships)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_group_ids(&self, account_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::AccountGroupMembership::find()
            .select_only()
            .column(entity::account_group_membership::Column::GroupId)
            .filter(entity::account_group_membership::Column::AccountId.eq(account_id))
            .order_by_asc(entity::account_group_membership::Column::GroupId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets the permission codenames granted to the account through its groups
    ///
    /// Codenames granted by more than one group are returned once.
    pub async fn get_permission_codenames(&self, account_id: i32) -> Result<Vec<String>, DbErr> {
        let group_ids = self.get_group_ids(account_id).await?;

        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::GroupPermission::find()
            .select_only()
            .column(entity::group_permission::Column::Permission)
            .distinct()
            .filter(entity::group_permission::Column::GroupId.is_in(group_ids))
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Deletes an account and its group memberships
    ///
    /// The person linked to the account must be unlinked first. Returns OK regardless of the
    /// account existing, check [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AccountGroupMembership::delete_many()
            .filter(entity::account_group_membership::Column::AccountId.eq(account_id))
            .exec(self.db)
            .await?;

        entity::prelude::Account::delete_by_id(account_id)
            .exec(self.db)
            .await
    }
}
