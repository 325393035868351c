use chrono::{FixedOffset, NaiveDate, NaiveDateTime};
use planner_domain::{at_offset, CalendarEvent, InvalidEventError, TimeSpan, User, YearMonth};
use planner_infra::IEventRepo;
use std::sync::Arc;
use thiserror::Error;

/// Queries and creates the `CalendarEvent`s of a `User`.
///
/// The service holds no state of its own, everything is read from and
/// written to the event repository.
#[derive(Clone)]
pub struct EventQueryService {
    events: Arc<dyn IEventRepo>,
}

#[derive(Error, Debug)]
pub enum EventServiceError {
    #[error(transparent)]
    InvalidEvent(#[from] InvalidEventError),
    #[error("The local date time: {0} can not be represented in the given offset")]
    DateOutOfRange(String),
    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

impl EventQueryService {
    pub fn new(events: Arc<dyn IEventRepo>) -> Self {
        Self { events }
    }

    /// Events created by `user` that start on `date` in the given offset,
    /// sorted by their start.
    pub async fn find_by_date(
        &self,
        user: &User,
        date: NaiveDate,
        zone_offset: FixedOffset,
    ) -> Result<Vec<CalendarEvent>, EventServiceError> {
        let timespan = TimeSpan::day(date, zone_offset)
            .ok_or_else(|| EventServiceError::DateOutOfRange(date.to_string()))?;
        self.find_by_timespan(user, &timespan).await
    }

    /// Events created by `user` that start within `year_month` in the given
    /// offset, sorted by their start.
    pub async fn find_by_month(
        &self,
        user: &User,
        year_month: YearMonth,
        zone_offset: FixedOffset,
    ) -> Result<Vec<CalendarEvent>, EventServiceError> {
        let timespan = TimeSpan::month(year_month, zone_offset)
            .ok_or_else(|| EventServiceError::DateOutOfRange(year_month.to_string()))?;
        self.find_by_timespan(user, &timespan).await
    }

    pub async fn create_event(
        &self,
        user: &User,
        name: Option<String>,
        description: Option<String>,
        start_at: NaiveDateTime,
        end_at: NaiveDateTime,
        zone_offset: FixedOffset,
    ) -> Result<CalendarEvent, EventServiceError> {
        let start_at = at_offset(start_at, zone_offset)
            .ok_or_else(|| EventServiceError::DateOutOfRange(start_at.to_string()))?;
        let end_at = at_offset(end_at, zone_offset)
            .ok_or_else(|| EventServiceError::DateOutOfRange(end_at.to_string()))?;

        let mut builder = CalendarEvent::builder()
            .creator(user)
            .start_at(start_at)
            .end_at(end_at);
        if let Some(name) = name {
            builder = builder.name(name);
        }
        if let Some(description) = description {
            builder = builder.description(description);
        }
        let event = builder.build()?;

        Ok(self.events.save(&event).await?)
    }

    async fn find_by_timespan(
        &self,
        user: &User,
        timespan: &TimeSpan,
    ) -> Result<Vec<CalendarEvent>, EventServiceError> {
        let events = self
            .events
            .find_by_creator_and_start_at_between(user, &timespan.start(), &timespan.end())
            .await?;
        Ok(sorted_events(events))
    }
}

/// Stable, so events with the same start keep the order of the repository
fn sorted_events(mut events: Vec<CalendarEvent>) -> Vec<CalendarEvent> {
    events.sort_by_key(|e| e.start_at());
    events
}
