mod inmemory;
mod postgres;

use chrono::{DateTime, FixedOffset};
pub use inmemory::InMemoryEventRepo;
use planner_domain::{CalendarEvent, User};
pub use postgres::PostgresEventRepo;

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    /// All the `CalendarEvent`s created by `creator` that start within
    /// `start` and `end`, both inclusive
    async fn find_by_creator_and_start_at_between(
        &self,
        creator: &User,
        start: &DateTime<FixedOffset>,
        end: &DateTime<FixedOffset>,
    ) -> anyhow::Result<Vec<CalendarEvent>>;
    /// Stores the `CalendarEvent` and returns the stored version of it,
    /// which is given an id if it did not have one already
    async fn save(&self, e: &CalendarEvent) -> anyhow::Result<CalendarEvent>;
}
