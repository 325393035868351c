use super::service::{EventQueryService, EventServiceError};
use crate::error::PlannerError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use planner_api_structs::get_events_by_month::*;
use planner_domain::{parse_zone, CalendarEvent, YearMonth, ID};
use planner_infra::PlannerContext;

pub async fn get_events_by_month_controller(
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let query_params = query_params.0;
    let usecase = GetEventsByMonthUseCase {
        user_id: path_params.user_id.clone(),
        month: query_params.month,
        zone: query_params.zone,
    };

    execute(usecase, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(PlannerError::from)
}

#[derive(Debug)]
pub struct GetEventsByMonthUseCase {
    pub user_id: ID,
    pub month: String,
    pub zone: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseError {
    UserNotFound(ID),
    InvalidMonth(String),
    InvalidZone(String),
    StorageError,
}

impl From<UseCaseError> for PlannerError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UserNotFound(user_id) => {
                Self::NotFound(format!("A user with id: {}, was not found.", user_id))
            }
            UseCaseError::InvalidMonth(month) => Self::BadClientData(format!(
                "The month: {} is invalid, it should be formatted as YYYY-M",
                month
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
impl UseCase for GetEventsByMonthUseCase {
    type Response = Vec<CalendarEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEventsByMonth";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        let user = match ctx.repos.users.find(&self.user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(UseCaseError::UserNotFound(self.user_id.clone())),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        let year_month = self
            .month
            .parse::<YearMonth>()
            .map_err(|_| UseCaseError::InvalidMonth(self.month.clone()))?;
        let first_midnight = year_month
            .first_day()
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| UseCaseError::InvalidMonth(self.month.clone()))?;
        let zone = self.zone.as_deref().unwrap_or("UTC");
        let zone_offset = parse_zone(zone, &first_midnight)
            .map_err(|_| UseCaseError::InvalidZone(zone.to_string()))?;

        EventQueryService::new(ctx.repos.events.clone())
            .find_by_month(&user, year_month, zone_offset)
            .await
            .map_err(|e| match e {
                EventServiceError::DateOutOfRange(_) => {
                    UseCaseError::InvalidMonth(self.month.clone())
                }
                _ => UseCaseError::StorageError,
            })
    }
}
