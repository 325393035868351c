use super::IEventRepo;
use chrono::{DateTime, FixedOffset, Utc};
use planner_domain::{CalendarEvent, User};
use sqlx::{FromRow, PgPool};
use std::convert::TryFrom;
use uuid::Uuid;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    user_uid: Uuid,
    name: Option<String>,
    description: Option<String>,
    start_at: DateTime<Utc>,
    start_offset: i32,
    end_at: DateTime<Utc>,
    end_offset: i32,
}

fn with_offset(ts: DateTime<Utc>, offset_seconds: i32) -> anyhow::Result<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(offset_seconds).ok_or_else(|| {
        anyhow::Error::msg(format!("Stored offset: {} is invalid", offset_seconds))
    })?;
    Ok(ts.with_timezone(&offset))
}

impl TryFrom<EventRaw> for CalendarEvent {
    type Error = anyhow::Error;

    fn try_from(e: EventRaw) -> anyhow::Result<Self> {
        let mut builder = CalendarEvent::builder()
            .id(e.event_uid.into())
            .creator_id(e.user_uid.into())
            .start_at(with_offset(e.start_at, e.start_offset)?)
            .end_at(with_offset(e.end_at, e.end_offset)?);
        if let Some(name) = e.name {
            builder = builder.name(name);
        }
        if let Some(description) = e.description {
            builder = builder.description(description);
        }
        Ok(builder.build()?)
    }
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn find_by_creator_and_start_at_between(
        &self,
        creator: &User,
        start: &DateTime<FixedOffset>,
        end: &DateTime<FixedOffset>,
    ) -> anyhow::Result<Vec<CalendarEvent>> {
        let events: Vec<EventRaw> = sqlx::query_as(
            r#"
            SELECT * FROM calendar_events AS e
            WHERE e.user_uid = $1 AND
            e.start_at BETWEEN $2 AND $3
            ORDER BY e.start_at
            "#,
        )
        .bind(creator.id.inner_ref())
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        events.into_iter().map(CalendarEvent::try_from).collect()
    }

    async fn save(&self, e: &CalendarEvent) -> anyhow::Result<CalendarEvent> {
        let id = e.id().cloned().unwrap_or_default();
        let e = e.clone().with_id(id.clone());
        sqlx::query(
            r#"
            INSERT INTO calendar_events(
                event_uid,
                user_uid,
                name,
                description,
                start_at,
                start_offset,
                end_at,
                end_offset
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (event_uid) DO UPDATE SET
                user_uid = $2,
                name = $3,
                description = $4,
                start_at = $5,
                start_offset = $6,
                end_at = $7,
                end_offset = $8
            "#,
        )
        .bind(id.inner_ref())
        .bind(e.creator().inner_ref())
        .bind(e.name())
        .bind(e.description())
        .bind(e.start_at())
        .bind(e.start_at().offset().local_minus_utc())
        .bind(e.end_at())
        .bind(e.end_at().offset().local_minus_utc())
        .execute(&self.pool)
        .await?;

        Ok(e)
    }
}
