use entity::person::Title;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String, example = "magister")]
    pub title: Title,
    /// Short title printed on rosters, e.g. `Mgr`
    pub title_abbreviation: String,
    pub account_id: Option<i32>,
}

/// Creates a person together with the account they log in with
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePersonDto {
    pub username: String,
    pub password: String,
    pub name: String,
    #[schema(value_type = String, example = "technician")]
    pub title: Title,
    #[serde(default)]
    pub group_ids: Vec<i32>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePersonDto {
    pub account_id: Option<i32>,
    pub name: String,
    #[schema(value_type = String, example = "magister")]
    pub title: Title,
}
