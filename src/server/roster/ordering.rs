use entity::shift::ShiftType;

use crate::server::model::db::ShiftModel;

/// Orders shifts for display: main shifts first in the order given, then every other shift by
/// start time. The sort is stable so shifts starting at the same time keep their input order.
///
/// Every roster view (detail, edit, print) lays out its columns with this function.
pub fn order_shifts(shifts: Vec<ShiftModel>) -> Vec<ShiftModel> {
    let (mut ordered, mut rest): (Vec<_>, Vec<_>) = shifts
        .into_iter()
        .partition(|shift| shift.shift_type == ShiftType::Main);

    rest.sort_by_key(|shift| shift.start_time);
    ordered.extend(rest);

    ordered
}
