pub use super::account::Entity as Account;
pub use super::account_group::Entity as AccountGroup;
pub use super::account_group_membership::Entity as AccountGroupMembership;
pub use super::group_permission::Entity as GroupPermission;
pub use super::person::Entity as Person;
pub use super::schedule::Entity as Schedule;
pub use super::shift::Entity as Shift;
pub use super::slot::Entity as Slot;
