use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_account::Account;

static IDX_MEMBERSHIP_ACCOUNT_GROUP: &str = "idx-account_group_membership-account_id-group_id";
static FK_MEMBERSHIP_ACCOUNT_ID: &str = "fk-account_group_membership-account_id";
static FK_MEMBERSHIP_GROUP_ID: &str = "fk-account_group_membership-group_id";
static IDX_GROUP_PERMISSION_GROUP_PERMISSION: &str = "idx-group_permission-group_id-permission";
static FK_GROUP_PERMISSION_GROUP_ID: &str = "fk-group_permission-group_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccountGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(AccountGroup::Id))
                    .col(string_uniq(AccountGroup::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccountGroupMembership::Table)
                    .if_not_exists()
                    .col(pk_auto(AccountGroupMembership::Id))
                    .col(integer(AccountGroupMembership::AccountId))
                    .col(integer(AccountGroupMembership::GroupId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MEMBERSHIP_ACCOUNT_ID)
                            .from(
                                AccountGroupMembership::Table,
                                AccountGroupMembership::AccountId,
                            )
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MEMBERSHIP_GROUP_ID)
                            .from(
                                AccountGroupMembership::Table,
                                AccountGroupMembership::GroupId,
                            )
                            .to(AccountGroup::Table, AccountGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MEMBERSHIP_ACCOUNT_GROUP)
                    .table(AccountGroupMembership::Table)
                    .col(AccountGroupMembership::AccountId)
                    .col(AccountGroupMembership::GroupId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GroupPermission::Table)
                    .if_not_exists()
                    .col(pk_auto(GroupPermission::Id))
                    .col(integer(GroupPermission::GroupId))
                    .col(string_len(GroupPermission::Permission, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GROUP_PERMISSION_GROUP_ID)
                            .from(GroupPermission::Table, GroupPermission::GroupId)
                            .to(AccountGroup::Table, AccountGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GROUP_PERMISSION_GROUP_PERMISSION)
                    .table(GroupPermission::Table)
                    .col(GroupPermission::GroupId)
                    .col(GroupPermission::Permission)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GROUP_PERMISSION_GROUP_PERMISSION)
                    .table(GroupPermission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GroupPermission::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MEMBERSHIP_ACCOUNT_GROUP)
                    .table(AccountGroupMembership::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(AccountGroupMembership::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AccountGroup::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AccountGroup {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum AccountGroupMembership {
    Table,
    Id,
    AccountId,
    GroupId,
}

#[derive(DeriveIden)]
enum GroupPermission {
    Table,
    Id,
    GroupId,
    Permission,
}
