use super::service::{EventQueryService, EventServiceError};
use crate::error::PlannerError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDateTime;
use planner_api_structs::create_event::*;
use planner_domain::{parse_zone, CalendarEvent, InvalidEventError, ID};
use planner_infra::PlannerContext;

pub async fn create_event_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let body = body.0;
    let usecase = CreateEventUseCase {
        user_id: path_params.user_id.clone(),
        name: body.name,
        description: body.description,
        start_at: body.start_at,
        end_at: body.end_at,
        zone: body.zone,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(PlannerError::from)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub user_id: ID,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    /// Defaults to UTC
    pub zone: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseError {
    UserNotFound(ID),
    InvalidZone(String),
    InvalidEvent(InvalidEventError),
    InvalidDate(String),
    StorageError,
}

impl From<UseCaseError> for PlannerError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UserNotFound(user_id) => {
                Self::NotFound(format!("A user with id: {}, was not found.", user_id))
            }
            UseCaseError::InvalidZone(zone) => Self::BadClientData(format!(
                "The zone: {} is neither a valid UTC offset nor a known timezone",
                zone
            )),
            UseCaseError::InvalidEvent(e) => Self::BadClientData(e.to_string()),
            UseCaseError::InvalidDate(msg) => Self::BadClientData(msg),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl From<EventServiceError> for UseCaseError {
    fn from(e: EventServiceError) -> Self {
        match e {
            EventServiceError::InvalidEvent(e) => Self::InvalidEvent(e),
            e @ EventServiceError::DateOutOfRange(_) => Self::InvalidDate(e.to_string()),
            EventServiceError::Repository(_) => Self::StorageError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = CalendarEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        let user = match ctx.repos.users.find(&self.user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(UseCaseError::UserNotFound(self.user_id.clone())),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        let zone = self.zone.as_deref().unwrap_or("UTC");
        let zone_offset = parse_zone(zone, &self.start_at)
            .map_err(|_| UseCaseError::InvalidZone(zone.to_string()))?;

        let event = EventQueryService::new(ctx.repos.events.clone())
            .create_event(
                &user,
                self.name.clone(),
                self.description.clone(),
                self.start_at,
                self.end_at,
                zone_offset,
            )
            .await?;

        Ok(event)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use planner_domain::User;

    struct TestContext {
        ctx: PlannerContext,
        user: User,
    }

    async fn setup() -> TestContext {
        let ctx = PlannerContext::create_inmemory();
        let user = User::new("user");
        ctx.repos.users.insert(&user).await.unwrap();

        TestContext { ctx, user }
    }

    fn local(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 11, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn usecase(user_id: ID, start_at: NaiveDateTime, end_at: NaiveDateTime) -> CreateEventUseCase {
        CreateEventUseCase {
            user_id,
            name: Some("event".into()),
            description: Some("description".into()),
            start_at,
            end_at,
            zone: None,
        }
    }

    #[actix_web::test]
    async fn creates_event() {
        let TestContext { ctx, user } = setup().await;

        let mut usecase = usecase(user.id.clone(), local(5, 13), local(5, 14));
        let event = usecase.execute(&ctx).await.expect("To create event");

        assert!(event.id().is_some());
        assert!(event.is_created_by(&user));
        assert_eq!(event.name(), Some("event"));
        assert_eq!(event.start_at().to_rfc3339(), "2019-11-05T13:00:00+00:00");
    }

    #[actix_web::test]
    async fn creates_event_in_the_given_zone() {
        let TestContext { ctx, user } = setup().await;

        let mut usecase = usecase(user.id.clone(), local(5, 13), local(5, 14));
        usecase.zone = Some("Asia/Seoul".into());
        let event = usecase.execute(&ctx).await.expect("To create event");

        assert_eq!(event.start_at().to_rfc3339(), "2019-11-05T13:00:00+09:00");
        assert_eq!(event.end_at().to_rfc3339(), "2019-11-05T14:00:00+09:00");
    }

    #[actix_web::test]
    async fn rejects_unknown_user() {
        let TestContext { ctx, user: _ } = setup().await;

        let user_id = ID::default();
        let mut usecase = usecase(user_id.clone(), local(5, 13), local(5, 14));
        let res = usecase.execute(&ctx).await;

        assert!(matches!(res, Err(UseCaseError::UserNotFound(id)) if id == user_id));
    }

    #[actix_web::test]
    async fn rejects_event_ending_before_it_starts() {
        let TestContext { ctx, user } = setup().await;

        let mut usecase = usecase(user.id.clone(), local(1, 15), local(1, 13));
        let res = usecase.execute(&ctx).await;

        assert!(matches!(
            res,
            Err(UseCaseError::InvalidEvent(
                InvalidEventError::StartNotBeforeEnd { .. }
            ))
        ));
    }

    #[actix_web::test]
    async fn rejects_invalid_zone() {
        let TestContext { ctx, user } = setup().await;

        let mut usecase = usecase(user.id.clone(), local(5, 13), local(5, 14));
        usecase.zone = Some("+25:00".into());
        let res = usecase.execute(&ctx).await;

        assert!(matches!(res, Err(UseCaseError::InvalidZone(_))));
    }

    #[actix_web::test]
    async fn unreachable_user_storage_is_an_internal_error() {
        use crate::shared::test_utils::context_with_unavailable_users;
        use actix_web::{http::StatusCode, ResponseError};

        let ctx = context_with_unavailable_users();
        let mut usecase = usecase(ID::default(), local(5, 13), local(5, 14));
        let err = usecase.execute(&ctx).await.expect_err("Users are unavailable");

        assert!(matches!(err, UseCaseError::StorageError));
        assert_eq!(
            PlannerError::from(err).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
