use crate::{APIResponse, BaseClient, ID};
use chrono::NaiveDateTime;
use planner_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CalendarEventClient {
    base: Arc<BaseClient>,
}

pub struct CreateEventInput {
    pub user_id: ID,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    /// UTC offset like `+09:00` or a timezone like `Europe/Oslo`
    pub zone: Option<String>,
}

pub struct GetEventsByDateInput {
    pub user_id: ID,
    /// `YYYY-M-D`
    pub date: String,
    pub zone: Option<String>,
}

pub struct GetEventsByMonthInput {
    pub user_id: ID,
    /// `YYYY-M`
    pub month: String,
    pub zone: Option<String>,
}

impl CalendarEventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateEventInput) -> APIResponse<create_event::APIResponse> {
        let body = create_event::RequestBody {
            name: input.name,
            description: input.description,
            start_at: input.start_at,
            end_at: input.end_at,
            zone: input.zone,
        };

        self.base
            .post(
                body,
                format!("user/{}/events", input.user_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn get_by_date(
        &self,
        input: GetEventsByDateInput,
    ) -> APIResponse<get_events_by_date::APIResponse> {
        let query = get_events_by_date::QueryParams {
            date: input.date,
            zone: input.zone,
        };

        self.base
            .get_with_query(
                &query,
                format!("user/{}/events/day", input.user_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn get_by_month(
        &self,
        input: GetEventsByMonthInput,
    ) -> APIResponse<get_events_by_month::APIResponse> {
        let query = get_events_by_month::QueryParams {
            month: input.month,
            zone: input.zone,
        };

        self.base
            .get_with_query(
                &query,
                format!("user/{}/events/month", input.user_id),
                StatusCode::OK,
            )
            .await
    }
}
