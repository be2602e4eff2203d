use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Professional title of a person.
///
/// Only [`Title::Magister`] satisfies the coverage rule for main shifts.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum Title {
    #[sea_orm(string_value = "magister")]
    Magister,
    #[sea_orm(string_value = "technician")]
    Technician,
}

impl Title {
    /// Short form used on printed rosters.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Magister => "Mgr",
            Self::Technician => "Tech.",
        }
    }

    pub fn is_senior_qualified(&self) -> bool {
        matches!(self, Self::Magister)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "person")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub account_id: Option<i32>,
    pub name: String,
    pub title: Title,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Account,
    #[sea_orm(has_many = "super::slot::Entity")]
    Slot,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Slot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
