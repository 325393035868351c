use chrono::{Duration, FixedOffset, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;
use thiserror::Error;

const MAX_OFFSET_SECONDS: i32 = 24 * 60 * 60;

#[derive(Error, Debug, PartialEq)]
pub enum InvalidZoneError {
    #[error("Zone: {0} is neither a valid UTC offset nor a known timezone")]
    Unknown(String),
}

/// Resolves the UTC offset that `zone` has at the given local date time.
///
/// Accepts `Z`, `UTC`, fixed offsets like `+09`, `+0900`, `-05:30` and
/// IANA timezone names like `Europe/Oslo`. Fixed offsets are the same at
/// every local time, a timezone name is resolved to the offset it has
/// at `local`.
pub fn parse_zone(zone: &str, local: &NaiveDateTime) -> Result<FixedOffset, InvalidZoneError> {
    let zone = zone.trim();
    if let Some(offset) = parse_fixed_offset(zone) {
        return Ok(offset);
    }

    let tz = zone
        .parse::<Tz>()
        .map_err(|_| InvalidZoneError::Unknown(zone.to_string()))?;
    let offset = match tz.offset_from_local_datetime(local).earliest() {
        Some(offset) => offset.fix(),
        // A local time inside a DST gap does not exist, it is shifted by the
        // offset in effect before the gap which lands after the transition
        None => {
            let before = tz
                .offset_from_utc_datetime(&(*local - Duration::days(1)))
                .fix();
            let utc = *local - Duration::seconds(i64::from(before.local_minus_utc()));
            tz.offset_from_utc_datetime(&utc).fix()
        }
    };
    Ok(offset)
}

fn parse_fixed_offset(zone: &str) -> Option<FixedOffset> {
    if zone.eq_ignore_ascii_case("z") || zone.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }

    let sign = match zone.chars().next()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let digits = zone[1..].replace(':', "");
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (
            digits[..2].parse::<i32>().ok()?,
            digits[2..].parse::<i32>().ok()?,
        ),
        _ => return None,
    };
    if minutes >= 60 {
        return None;
    }
    let seconds = hours * 3600 + minutes * 60;
    if seconds >= MAX_OFFSET_SECONDS {
        return None;
    }
    FixedOffset::east_opt(sign * seconds)
}
