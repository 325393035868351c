use super::service::{EventQueryService, EventServiceError};
use crate::error::PlannerError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use planner_api_structs::get_events_by_date::*;
use planner_domain::{parse_date, parse_zone, CalendarEvent, ID};
use planner_infra::PlannerContext;

pub async fn get_events_by_date_controller(
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let query_params = query_params.0;
    let usecase = GetEventsByDateUseCase {
        user_id: path_params.user_id.clone(),
        date: query_params.date,
        zone: query_params.zone,
    };

    execute(usecase, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(PlannerError::from)
}

#[derive(Debug)]
pub struct GetEventsByDateUseCase {
    pub user_id: ID,
    /// `YYYY-M-D`
    pub date: String,
    pub zone: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseError {
    UserNotFound(ID),
    InvalidDate(String),
    InvalidZone(String),
    StorageError,
}

impl From<UseCaseError> for PlannerError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UserNotFound(user_id) => {
                Self::NotFound(format!("A user with id: {}, was not found.", user_id))
            }
            UseCaseError::InvalidDate(date) => Self::BadClientData(format!(
                "The date: {} is invalid, it should be formatted as YYYY-M-D",
                date
            )),
            UseCaseError::InvalidZone(zone) => Self::BadClientData(format!(
                "The zone: {} is neither a valid UTC offset nor a known timezone",
                zone
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventsByDateUseCase {
    type Response = Vec<CalendarEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEventsByDate";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        let user = match ctx.repos.users.find(&self.user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(UseCaseError::UserNotFound(self.user_id.clone())),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        let date =
            parse_date(&self.date).map_err(|_| UseCaseError::InvalidDate(self.date.clone()))?;
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| UseCaseError::InvalidDate(self.date.clone()))?;
        let zone = self.zone.as_deref().unwrap_or("UTC");
        let zone_offset =
            parse_zone(zone, &midnight).map_err(|_| UseCaseError::InvalidZone(zone.to_string()))?;

        EventQueryService::new(ctx.repos.events.clone())
            .find_by_date(&user, date, zone_offset)
            .await
            .map_err(|e| match e {
                EventServiceError::DateOutOfRange(_) => {
                    UseCaseError::InvalidDate(self.date.clone())
                }
                _ => UseCaseError::StorageError,
            })
    }
}
