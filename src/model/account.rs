use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::permission::Permission;

/// Credentials submitted to start a session
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// The logged in account and its effective permissions
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrentUserDto {
    pub id: i32,
    pub username: String,
    pub is_superuser: bool,
    pub permissions: Vec<Permission>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountDto {
    pub id: i32,
    pub username: String,
    pub is_superuser: bool,
    pub group_ids: Vec<i32>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAccountDto {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub group_ids: Vec<i32>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupDto {
    pub id: i32,
    pub name: String,
    pub permissions: Vec<Permission>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateGroupDto {
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}
