//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate used throughout the server.

/// A named date range that shifts and slots belong to.
///
/// # Fields (from `entity::schedule::Model`)
/// - `id` - Primary key
/// - `name` - Display name, at most 32 characters
/// - `start_day` - First day of the schedule, inclusive
/// - `end_date` - Last day of the schedule, inclusive
pub type ScheduleModel = entity::schedule::Model;

/// A recurring daily time window within a schedule.
///
/// # Fields (from `entity::shift::Model`)
/// - `id` - Primary key
/// - `schedule_id` - Owning schedule
/// - `name` - Display name
/// - `shift_type` - Main shifts are subject to the coverage rule
/// - `start_time` / `end_time` - Time of day the shift runs
/// - `capacity` - Number of slots per day
pub type ShiftModel = entity::shift::Model;

/// One assignable position of a shift on a given day.
///
/// # Fields (from `entity::slot::Model`)
/// - `id` - Primary key
/// - `shift_id` - Owning shift
/// - `date` - Day the slot is worked
/// - `position` - Index in `0..capacity`
/// - `person_id` - Assigned person, `None` when open
pub type SlotModel = entity::slot::Model;

pub type PersonModel = entity::person::Model;

pub type AccountModel = entity::account::Model;

pub type GroupModel = entity::account_group::Model;
