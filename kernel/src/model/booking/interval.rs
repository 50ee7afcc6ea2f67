use chrono::{Duration, NaiveDate, NaiveTime};

/// Half-open time range `[start, end)` occupied on a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Interval {
    /// Derives the end by adding whole hours to the start on the given
    /// date. An interval pushed past midnight comes back wrapped
    /// (`end <= start`); admission rejects those before anything is
    /// persisted.
    pub fn from_start(date: NaiveDate, start: NaiveTime, duration_hours: i32) -> Self {
        let end = (date.and_time(start) + Duration::hours(i64::from(duration_hours))).time();
        Self { start, end }
    }

    /// Half-open overlap: an interval ending exactly when another starts
    /// does not overlap it.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

pub fn total_price(duration_hours: i32, hourly_price: i32) -> i64 {
    i64::from(duration_hours) * i64::from(hourly_price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn end_is_start_plus_whole_hours() {
        let interval = Interval::from_start(date(), time(9, 0), 2);
        assert_eq!(interval.start, time(9, 0));
        assert_eq!(interval.end, time(11, 0));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = Interval::from_start(date(), time(9, 0), 2);
        let b = Interval::from_start(date(), time(10, 0), 3);
        let c = Interval::from_start(date(), time(13, 0), 1);

        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert!(a.overlaps(&b));
        assert_eq!(a.overlaps(&c), c.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn adjacent_intervals_do_not_overlap() {
        let first = Interval::from_start(date(), time(9, 0), 2);
        let second = Interval::from_start(date(), time(11, 0), 1);
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn contained_interval_overlaps() {
        let outer = Interval::from_start(date(), time(8, 0), 8);
        let inner = Interval::from_start(date(), time(10, 0), 1);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn midnight_wrap_comes_back_degenerate() {
        let wrapped = Interval::from_start(date(), time(21, 0), 5);
        assert!(wrapped.end <= wrapped.start);
    }

    #[test]
    fn total_price_is_duration_times_rate() {
        assert_eq!(total_price(3, 1500), 4500);
        assert_eq!(total_price(1, 0), 0);
    }
}
