use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "group_permission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub group_id: i32,
    /// Permission codename, e.g. `view_schedule`
    pub permission: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account_group::Entity",
        from = "Column::GroupId",
        to = "super::account_group::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AccountGroup,
}

impl Related<super::account_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
