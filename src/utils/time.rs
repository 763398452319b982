use chrono::{Days, NaiveDate, Utc};

/// Current calendar date in UTC; all due-date comparisons use it.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}

pub fn previous_day(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(1)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_arithmetic_crosses_month_boundaries() {
        let d = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        assert_eq!(next_day(d), NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert_eq!(previous_day(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()), d);
    }
}
