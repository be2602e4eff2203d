use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        account::{CreateGroupDto, GroupDto},
        permission::Permission,
    },
    server::{
        data::account::group::GroupRepository,
        error::{validation::ValidationError, Error},
        model::caller::Caller,
        util::validate::{check_name, MAX_NAME_LEN},
    },
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_group(&self, caller: &Caller, group: CreateGroupDto) -> Result<GroupDto, Error> {
        caller.require(Permission::AddGroup)?;

        let mut permissions = group.permissions;
        permissions.sort();
        permissions.dedup();

        let mut errors = ValidationError::new();
        let name = check_name(&mut errors, "name", &group.name, MAX_NAME_LEN);
        let group_repo = GroupRepository::new(self.db);
        if !name.is_empty() && group_repo.get_by_name(&name).await?.is_some() {
            errors.push("name", "is already taken");
        }
        errors.into_result()?;

        let codenames = permissions
            .iter()
            .map(|permission| permission.codename().to_string())
            .collect();
        let created = group_repo.create(name, codenames).await?;

        tracing::info!(
            group_id = created.id,
            account_id = caller.account_id,
            "Created group {:?}",
            created.name
        );

        Ok(GroupDto {
            id: created.id,
            name: created.name,
            permissions,
        })
    }

    pub async fn list_groups(&self, caller: &Caller) -> Result<Vec<GroupDto>, Error> {
        caller.require(Permission::AddGroup)?;

        let groups = GroupRepository::new(self.db).get_all().await?;

        Ok(groups
            .into_iter()
            .map(|(group, stored)| {
                let mut permissions: Vec<Permission> = stored
                    .into_iter()
                    .filter_map(|p| p.permission.parse().ok())
                    .collect();
                permissions.sort();

                GroupDto {
                    id: group.id,
                    name: group.name,
                    permissions,
                }
            })
            .collect())
    }
}
