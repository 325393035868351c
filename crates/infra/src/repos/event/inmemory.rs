use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, FixedOffset};
use planner_domain::{CalendarEvent, User};

pub struct InMemoryEventRepo {
    calendar_events: std::sync::Mutex<Vec<CalendarEvent>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            calendar_events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn find_by_creator_and_start_at_between(
        &self,
        creator: &User,
        start: &DateTime<FixedOffset>,
        end: &DateTime<FixedOffset>,
    ) -> anyhow::Result<Vec<CalendarEvent>> {
        let res = find_by(&self.calendar_events, |event| {
            event.is_created_by(creator) && *start <= event.start_at() && event.start_at() <= *end
        });
        Ok(res)
    }

    async fn save(&self, e: &CalendarEvent) -> anyhow::Result<CalendarEvent> {
        let id = e.id().cloned().unwrap_or_default();
        let e = e.clone().with_id(id.clone());
        upsert_by(&e, &self.calendar_events, |event| event.id() == Some(&id));
        Ok(e)
    }
}
