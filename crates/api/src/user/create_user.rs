use crate::error::PlannerError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use planner_api_structs::create_user::*;
use planner_domain::User;
use planner_infra::PlannerContext;

pub async fn create_user_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let usecase = CreateUserUseCase { name: body.0.name };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Created().json(APIResponse::new(usecase_res.user)))
        .map_err(PlannerError::from)
}

#[derive(Debug)]
pub struct CreateUserUseCase {
    pub name: String,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
}

#[derive(Debug)]
pub enum UseCaseError {
    EmptyName,
    StorageError,
}

impl From<UseCaseError> for PlannerError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyName => Self::BadClientData("A user needs a name".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateUserUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "CreateUser";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::EmptyName);
        }
        let user = User::new(name);

        let res = ctx.repos.users.insert(&user).await;
        match res {
            Ok(_) => Ok(UseCaseRes { user }),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
