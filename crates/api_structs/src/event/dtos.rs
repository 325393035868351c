use chrono::{DateTime, FixedOffset};
use planner_domain::{CalendarEvent, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventDTO {
    pub id: Option<ID>,
    pub creator_id: ID,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_at: DateTime<FixedOffset>,
    pub end_at: DateTime<FixedOffset>,
}

impl CalendarEventDTO {
    pub fn new(event: CalendarEvent) -> Self {
        Self {
            id: event.id().cloned(),
            creator_id: event.creator().clone(),
            name: event.name().map(String::from),
            description: event.description().map(String::from),
            start_at: event.start_at(),
            end_at: event.end_at(),
        }
    }
}
