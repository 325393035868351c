use chrono::{NaiveDate, NaiveDateTime};
use planner_sdk::{CalendarEvent, CreateEventInput, PlannerSDK, ID};

pub fn local_datetime(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .expect("Valid local date time")
}

pub async fn create_event(
    sdk: &PlannerSDK,
    user_id: &ID,
    name: &str,
    start_at: NaiveDateTime,
    zone: Option<&str>,
) -> CalendarEvent {
    sdk.event
        .create(CreateEventInput {
            user_id: user_id.clone(),
            name: Some(name.into()),
            description: None,
            start_at,
            end_at: start_at + chrono::Duration::hours(1),
            zone: zone.map(String::from),
        })
        .await
        .expect("Expected to create event")
        .event
}

pub fn event_names(events: &[CalendarEvent]) -> Vec<&str> {
    events
        .iter()
        .map(|e| e.name.as_deref().unwrap_or_default())
        .collect()
}
