use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "account_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::account_group_membership::Entity")]
    AccountGroupMembership,
    #[sea_orm(has_many = "super::group_permission::Entity")]
    GroupPermission,
}

impl Related<super::account_group_membership::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountGroupMembership.def()
    }
}

impl Related<super::group_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupPermission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
