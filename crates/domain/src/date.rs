use chrono::NaiveDate;
use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

const VALID_YEARS: std::ops::RangeInclusive<i32> = 1970..=2100;

pub fn is_valid_date(datestr: &str) -> anyhow::Result<(i32, u32, u32)> {
    let datestr = String::from(datestr);
    let dates = datestr.split('-').collect::<Vec<_>>();
    if dates.len() != 3 {
        return Err(anyhow::Error::msg(datestr));
    }
    let (year, month, day) = match (
        dates[0].parse::<i32>(),
        dates[1].parse::<u32>(),
        dates[2].parse::<u32>(),
    ) {
        (Ok(year), Ok(month), Ok(day)) => (year, month, day),
        _ => return Err(anyhow::Error::msg(datestr)),
    };

    if !VALID_YEARS.contains(&year) {
        return Err(anyhow::Error::msg(datestr));
    }

    let month_length = match get_month_length(year, month) {
        Some(length) => length,
        None => return Err(anyhow::Error::msg(datestr)),
    };

    if day < 1 || day > month_length {
        return Err(anyhow::Error::msg(datestr));
    }

    Ok((year, month, day))
}

/// Parses a `YYYY-M-D` date string into a `NaiveDate`
pub fn parse_date(datestr: &str) -> anyhow::Result<NaiveDate> {
    let (year, month, day) = is_valid_date(datestr)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow::Error::msg(datestr.to_string()))
}

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

/// Number of days in the month, January is 1. `None` for months outside 1..=12.
pub fn get_month_length(year: i32, month: u32) -> Option<u32> {
    let length = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return None,
    };
    Some(length)
}

/// A calendar month of a given year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidYearMonthError {
    #[error("Year month: {0} is malformed, expected format is YYYY-M")]
    Malformed(String),
    #[error("Year: {0} is out of the supported range")]
    InvalidYear(i32),
    #[error("Month: {0} is not a month between 1 and 12")]
    InvalidMonth(u32),
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, InvalidYearMonthError> {
        if !VALID_YEARS.contains(&year) {
            return Err(InvalidYearMonthError::InvalidYear(year));
        }
        if !(1..=12).contains(&month) {
            return Err(InvalidYearMonthError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn length(&self) -> u32 {
        // The month is validated on construction
        get_month_length(self.year, self.month)
            .unwrap_or_else(|| panic!("Invalid month in {}", self))
    }

    pub fn first_day(&self) -> NaiveDate {
        self.day(1)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.day(self.length())
    }

    fn day(&self, day: u32) -> NaiveDate {
        // Year and month are validated on construction and `day` is within the month
        NaiveDate::from_ymd_opt(self.year, self.month, day)
            .unwrap_or_else(|| panic!("Invalid day {} in {}", day, self))
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = InvalidYearMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split('-').collect::<Vec<_>>();
        if parts.len() != 2 {
            return Err(InvalidYearMonthError::Malformed(s.to_string()));
        }
        match (parts[0].parse::<i32>(), parts[1].parse::<u32>()) {
            (Ok(year), Ok(month)) => Self::new(year, month),
            _ => Err(InvalidYearMonthError::Malformed(s.to_string())),
        }
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct YearMonthVisitor;

        impl<'de> Visitor<'de> for YearMonthVisitor {
            type Value = YearMonth;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A year month in the format YYYY-M")
            }

            fn visit_str<E>(self, value: &str) -> Result<YearMonth, E>
            where
                E: serde::de::Error,
            {
                value.parse::<YearMonth>().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(YearMonthVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_accepts_valid_dates() {
        let valid_dates = vec![
            "2018-1-1",
            "2025-12-31",
            "2020-1-12",
            "2020-2-29",
            "2020-02-2",
            "2020-02-02",
            "2020-2-09",
        ];

        for date in &valid_dates {
            assert!(is_valid_date(date).is_ok());
        }
    }

    #[test]
    fn it_rejects_invalid_dates() {
        let invalid_dates = vec![
            "2018--1-1",
            "2020-1-32",
            "2020-2-30",
            "2019-2-29",
            "2020-0-1",
            "2020-13-1",
            "2020-1-0",
            "1969-12-31",
            "2020-1",
            "",
        ];

        for date in &invalid_dates {
            assert!(is_valid_date(date).is_err());
        }
    }

    #[test]
    fn it_parses_dates() {
        assert_eq!(
            parse_date("2019-11-1").unwrap(),
            NaiveDate::from_ymd_opt(2019, 11, 1).unwrap()
        );
        assert!(parse_date("2019-11-31").is_err());
    }

    #[test]
    fn it_knows_leap_years() {
        assert!(is_leap_year(2020));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2019));
    }

    #[test]
    fn it_gives_month_lengths() {
        assert_eq!(get_month_length(2019, 1), Some(31));
        assert_eq!(get_month_length(2019, 4), Some(30));
        assert_eq!(get_month_length(2020, 2), Some(29));
        assert_eq!(get_month_length(2019, 12), Some(31));
        assert_eq!(get_month_length(2019, 0), None);
        assert_eq!(get_month_length(2019, 13), None);
    }

    #[test]
    fn year_month_spans_the_whole_month() {
        let cases = vec![
            ((2019, 11), 30),
            ((2019, 12), 31),
            ((2019, 2), 28),
            ((2020, 2), 29),
            ((2000, 2), 29),
            ((2100, 2), 28),
        ];
        for ((year, month), last_day) in cases {
            let year_month = YearMonth::new(year, month).unwrap();
            assert_eq!(
                year_month.first_day(),
                NaiveDate::from_ymd_opt(year, month, 1).unwrap()
            );
            assert_eq!(
                year_month.last_day(),
                NaiveDate::from_ymd_opt(year, month, last_day).unwrap()
            );
        }
    }

    #[test]
    fn it_parses_year_months() {
        assert_eq!(
            "2019-11".parse::<YearMonth>(),
            Ok(YearMonth::new(2019, 11).unwrap())
        );
        assert_eq!(
            "2020-2".parse::<YearMonth>(),
            Ok(YearMonth::new(2020, 2).unwrap())
        );
        assert_eq!(
            "2020-13".parse::<YearMonth>(),
            Err(InvalidYearMonthError::InvalidMonth(13))
        );
        assert_eq!(
            "2020-0".parse::<YearMonth>(),
            Err(InvalidYearMonthError::InvalidMonth(0))
        );
        assert_eq!(
            "1900-1".parse::<YearMonth>(),
            Err(InvalidYearMonthError::InvalidYear(1900))
        );
        assert!("2020-1-1".parse::<YearMonth>().is_err());
        assert!("2020/1".parse::<YearMonth>().is_err());
    }

    #[test]
    fn year_month_displays_as_it_is_parsed() {
        let year_month = YearMonth::new(2019, 3).unwrap();
        assert_eq!(year_month.to_string(), "2019-03");
        assert_eq!(year_month.to_string().parse::<YearMonth>(), Ok(year_month));
    }
}
