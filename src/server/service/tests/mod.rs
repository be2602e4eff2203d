use shiftboard_test_utils::prelude::*;

use crate::{model::permission::Permission, server::model::caller::Caller};

mod schedule;

fn superuser() -> Caller {
    Caller::superuser(1, "admin".to_string())
}

/// A non-superuser caller holding only `permissions`
fn caller_with(permissions: &[Permission]) -> Caller {
    Caller::new(2, "editor".to_string(), false, permissions.iter().copied())
}
