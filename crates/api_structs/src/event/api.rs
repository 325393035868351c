use crate::dtos::CalendarEventDTO;
use chrono::NaiveDateTime;
use planner_domain::{CalendarEvent, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventResponse {
    pub event: CalendarEventDTO,
}

impl CalendarEventResponse {
    pub fn new(event: CalendarEvent) -> Self {
        Self {
            event: CalendarEventDTO::new(event),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventsResponse {
    pub events: Vec<CalendarEventDTO>,
}

impl CalendarEventsResponse {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self {
            events: events.into_iter().map(CalendarEventDTO::new).collect(),
        }
    }
}

pub mod create_event {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        /// Local date time without offset, e.g. `2019-11-01T09:00:00`
        pub start_at: NaiveDateTime,
        pub end_at: NaiveDateTime,
        /// UTC offset or timezone name, defaults to UTC
        #[serde(default)]
        pub zone: Option<String>,
    }

    pub type APIResponse = CalendarEventResponse;
}

pub mod get_events_by_date {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        /// `YYYY-M-D`
        pub date: String,
        #[serde(default)]
        pub zone: Option<String>,
    }

    pub type APIResponse = CalendarEventsResponse;
}

pub mod get_events_by_month {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        /// `YYYY-M`
        pub month: String,
        #[serde(default)]
        pub zone: Option<String>,
    }

    pub type APIResponse = CalendarEventsResponse;
}
