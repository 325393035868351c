use crate::date::YearMonth;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Inclusive range of zoned timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSpan {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl TimeSpan {
    /// From midnight until the last nanosecond of `date` in the given offset.
    /// `None` if the boundaries can not be represented.
    pub fn day(date: NaiveDate, offset: FixedOffset) -> Option<Self> {
        Self::between_days(date, date, offset)
    }

    /// From midnight of the first day until the last nanosecond of the last
    /// day of `year_month` in the given offset.
    pub fn month(year_month: YearMonth, offset: FixedOffset) -> Option<Self> {
        Self::between_days(year_month.first_day(), year_month.last_day(), offset)
    }

    fn between_days(first: NaiveDate, last: NaiveDate, offset: FixedOffset) -> Option<Self> {
        let start = at_offset(first.and_hms_opt(0, 0, 0)?, offset)?;
        let end = at_offset(last.and_hms_nano_opt(23, 59, 59, 999_999_999)?, offset)?;
        Some(Self { start, end })
    }

    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    /// Both ends are included
    pub fn contains(&self, instant: &DateTime<FixedOffset>) -> bool {
        self.start <= *instant && *instant <= self.end
    }
}

/// Interprets the naive local date time as a wall clock time in `offset`
pub fn at_offset(local: NaiveDateTime, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    offset.from_local_datetime(&local).single()
}

#[cfg(test)]
mod test {
    use super::*;

    fn offset(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    #[test]
    fn day_span_covers_the_whole_day() {
        let date = NaiveDate::from_ymd_opt(2019, 11, 1).unwrap();
        let span = TimeSpan::day(date, offset(0)).unwrap();

        assert_eq!(span.start().to_rfc3339(), "2019-11-01T00:00:00+00:00");
        assert_eq!(
            span.end().to_rfc3339(),
            "2019-11-01T23:59:59.999999999+00:00"
        );
    }

    #[test]
    fn day_span_respects_the_offset() {
        let date = NaiveDate::from_ymd_opt(2019, 11, 1).unwrap();
        let span = TimeSpan::day(date, offset(9)).unwrap();

        assert_eq!(span.start().to_rfc3339(), "2019-11-01T00:00:00+09:00");
        // Midnight in Seoul is 15:00 the day before in UTC
        assert_eq!(
            span.start().naive_utc(),
            NaiveDate::from_ymd_opt(2019, 10, 31)
                .unwrap()
                .and_hms_opt(15, 0, 0)
                .unwrap()
        );
        assert_eq!(span.start().offset(), &offset(9));
        assert_eq!(span.end().offset(), &offset(9));
    }

    #[test]
    fn month_span_ends_on_the_true_last_day() {
        let cases = vec![
            ((2019, 11), "2019-11-30T23:59:59.999999999-05:00"),
            ((2019, 12), "2019-12-31T23:59:59.999999999-05:00"),
            ((2019, 2), "2019-02-28T23:59:59.999999999-05:00"),
            ((2020, 2), "2020-02-29T23:59:59.999999999-05:00"),
        ];
        for ((year, month), expected_end) in cases {
            let year_month = YearMonth::new(year, month).unwrap();
            let span = TimeSpan::month(year_month, offset(-5)).unwrap();
            assert_eq!(
                span.start().to_rfc3339(),
                format!("{}-{:02}-01T00:00:00-05:00", year, month)
            );
            assert_eq!(span.end().to_rfc3339(), expected_end);
        }
    }

    #[test]
    fn contains_is_inclusive() {
        let date = NaiveDate::from_ymd_opt(2019, 11, 1).unwrap();
        let span = TimeSpan::day(date, offset(0)).unwrap();

        assert!(span.contains(&span.start()));
        assert!(span.contains(&span.end()));
        assert!(!span.contains(&(span.start() - chrono::Duration::nanoseconds(1))));
        assert!(!span.contains(&(span.end() + chrono::Duration::nanoseconds(1))));
    }

    #[test]
    fn contains_compares_instants() {
        let date = NaiveDate::from_ymd_opt(2019, 11, 1).unwrap();
        let span = TimeSpan::day(date, offset(0)).unwrap();

        // 2019-11-01T08:00+09:00 is 2019-10-31T23:00 in UTC
        let seoul_morning = offset(9).with_ymd_and_hms(2019, 11, 1, 8, 0, 0).unwrap();
        assert!(!span.contains(&seoul_morning));
        // 2019-10-31T20:00-05:00 is 2019-11-01T01:00 in UTC
        let new_york_evening = offset(-5).with_ymd_and_hms(2019, 10, 31, 20, 0, 0).unwrap();
        assert!(span.contains(&new_york_evening));
    }
}
