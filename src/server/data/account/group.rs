use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    /// Creates a new instance of [`GroupRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a group granting the provided permission codenames
    pub async fn create(
        &self,
        name: String,
        codenames: Vec<String>,
    ) -> Result<entity::account_group::Model, DbErr> {
        let group = entity::account_group::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if !codenames.is_empty() {
            let permissions =
                codenames
                    .into_iter()
                    .map(|permission| entity::group_permission::ActiveModel {
                        group_id: ActiveValue::Set(group.id),
                        permission: ActiveValue::Set(permission),
                        ..Default::default()
                    });

            entity::prelude::GroupPermission::insert_many(permissions)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(group)
    }

    /// Gets every group with its permission codenames, ordered by name
    pub async fn get_all(
        &self,
    ) -> Result<
        Vec<(
            entity::account_group::Model,
            Vec<entity::group_permission::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::AccountGroup::find()
            .order_by_asc(entity::account_group::Column::Name)
            .find_with_related(entity::group_permission::Entity)
            .all(self.db)
            .await
    }

    pub async fn get_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::account_group::Model>, DbErr> {
        entity::prelude::AccountGroup::find()
            .filter(entity::account_group::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_many_by_ids(
        &self,
        group_ids: &[i32],
    ) -> Result<Vec<entity::account_group::Model>, DbErr> {
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::AccountGroup::find()
            .filter(entity::account_group::Column::Id.is_in(group_ids.iter().copied()))
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use shiftboard_test_utils::prelude::*;

    use crate::server::data::account::group::GroupRepository;

    /// Expect the group to be listed with its permissions
    #[tokio::test]
    async fn creates_and_lists_group() -> Result<(), TestError> {
        let test = TestBuilder::new().with_account_tables().build().await?;

        let group_repo = GroupRepository::new(&test.db);
        let group = group_repo
            .create(
                "Editors".to_string(),
                vec!["view_schedule".to_string(), "change_schedule".to_string()],
            )
            .await?;

        let groups = group_repo.get_all().await?;

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, group);
        assert_eq!(groups[0].1.len(), 2);

        Ok(())
    }

    /// Expect Error when the group name is taken
    #[tokio::test]
    async fn fails_for_duplicate_name() -> Result<(), TestError> {
        let test = TestBuilder::new().with_account_tables().build().await?;
        test.person().insert_group("Editors", &[]).await?;

        let result = GroupRepository::new(&test.db)
            .create("Editors".to_string(), Vec::new())
            .await;

        assert!(result.is_err());

        Ok(())
    }

    /// Expect only existing groups to be returned
    #[tokio::test]
    async fn gets_existing_groups_only() -> Result<(), TestError> {
        let test = TestBuilder::new().with_account_tables().build().await?;
        let group = test.person().insert_group("Editors", &[]).await?;

        let groups = GroupRepository::new(&test.db)
            .get_many_by_ids(&[group.id, group.id + 1])
            .await?;

        assert_eq!(groups, vec![group]);

        Ok(())
    }
}
