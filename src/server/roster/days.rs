use chrono::NaiveDate;

/// Every calendar day from `start_day` through `end_date`, both inclusive.
///
/// Returns an empty list if `end_date` is before `start_day`.
pub fn schedule_days(start_day: NaiveDate, end_date: NaiveDate) -> Vec<NaiveDate> {
    start_day
        .iter_days()
        .take_while(|day| *day <= end_date)
        .collect()
}
