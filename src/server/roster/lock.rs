use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// Per-schedule locks serializing slot materialization.
///
/// Two requests rendering the same schedule at once would otherwise both plan the same missing
/// slots. Holding the schedule's lock across plan and insert makes the second request see the
/// slots the first one created.
#[derive(Clone, Default)]
pub struct MaterializationLocks {
    locks: Arc<Mutex<HashMap<i32, Arc<tokio::sync::Mutex<()>>>>>,
}

impl MaterializationLocks {
    /// Returns the lock for `schedule_id`, creating it on first use
    pub fn for_schedule(&self, schedule_id: i32) -> Arc<tokio::sync::Mutex<()>> {
        // A poisoned map is still consistent
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());

        locks.entry(schedule_id).or_default().clone()
    }

    /// Drops the lock of a deleted schedule
    pub fn forget(&self, schedule_id: i32) {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());

        locks.remove(&schedule_id);
    }

    /// Number of schedules with a lock entry
    #[cfg(test)]
    pub(crate) fn tracked(&self) -> usize {
        self.locks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}
