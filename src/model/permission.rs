use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Named capability required by API operations.
///
/// Permissions are granted to accounts through groups; superuser accounts hold all of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewSchedule,
    AddSchedule,
    ChangeSchedule,
    DeleteSchedule,
    AddShift,
    DeleteShift,
    AddPerson,
    ChangePerson,
    AddGroup,
    AddUser,
    DeleteUser,
}

impl Permission {
    pub const ALL: [Permission; 11] = [
        Self::ViewSchedule,
        Self::AddSchedule,
        Self::ChangeSchedule,
        Self::DeleteSchedule,
        Self::AddShift,
        Self::DeleteShift,
        Self::AddPerson,
        Self::ChangePerson,
        Self::AddGroup,
        Self::AddUser,
        Self::DeleteUser,
    ];

    /// Codename stored in the database for this permission
    pub fn codename(&self) -> &'static str {
        match self {
            Self::ViewSchedule => "view_schedule",
            Self::AddSchedule => "add_schedule",
            Self::ChangeSchedule => "change_schedule",
            Self::DeleteSchedule => "delete_schedule",
            Self::AddShift => "add_shift",
            Self::DeleteShift => "delete_shift",
            Self::AddPerson => "add_person",
            Self::ChangePerson => "change_person",
            Self::AddGroup => "add_group",
            Self::AddUser => "add_user",
            Self::DeleteUser => "delete_user",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.codename())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|permission| permission.codename() == s)
            .ok_or_else(|| format!("unknown permission codename {:?}", s))
    }
}
