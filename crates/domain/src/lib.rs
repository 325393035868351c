mod date;
mod event;
mod shared;
mod timespan;
mod user;
mod zone;

pub use date::{
    get_month_length, is_leap_year, is_valid_date, parse_date, InvalidYearMonthError, YearMonth,
};
pub use event::{CalendarEvent, CalendarEventBuilder, InvalidEventError};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use timespan::{at_offset, TimeSpan};
pub use user::User;
pub use zone::{parse_zone, InvalidZoneError};
