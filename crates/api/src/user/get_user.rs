use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use planner_api_structs::get_user::*;
use planner_domain::{User, ID};
use planner_infra::PlannerContext;

pub async fn get_user_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let usecase = GetUserUseCase {
        user_id: path_params.user_id.clone(),
    };
    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(APIResponse::new(usecase_res.user)))
        .map_err(PlannerError::from)
}

#[derive(Debug)]
struct GetUserUseCase {
    user_id: ID,
}

#[derive(Debug)]
struct UseCaseRes {
    pub user: User,
}

#[derive(Debug)]
enum UseCaseError {
    UserNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for PlannerError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UserNotFound(id) => {
                Self::NotFound(format!("A user with id: {}, was not found.", id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUserUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUser";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.users.find(&self.user_id).await {
            Ok(Some(user)) => Ok(UseCaseRes { user }),
            Ok(None) => Err(UseCaseError::UserNotFound(self.user_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::context_with_unavailable_users;
    use actix_web::{http::StatusCode, ResponseError};

    #[actix_web::test]
    async fn finds_user() {
        let ctx = PlannerContext::create_inmemory();
        let user = User::new("user");
        ctx.repos.users.insert(&user).await.unwrap();

        let mut usecase = GetUserUseCase {
            user_id: user.id.clone(),
        };
        let res = usecase.execute(&ctx).await.expect("To find user");

        assert_eq!(res.user, user);
    }

    #[actix_web::test]
    async fn missing_user_is_not_found() {
        let ctx = PlannerContext::create_inmemory();

        let mut usecase = GetUserUseCase {
            user_id: ID::default(),
        };
        let err = usecase.execute(&ctx).await.expect_err("No such user");

        assert_eq!(PlannerError::from(err).status_code(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn unreachable_user_storage_is_an_internal_error() {
        let ctx = context_with_unavailable_users();

        let mut usecase = GetUserUseCase {
            user_id: ID::default(),
        };
        let err = usecase.execute(&ctx).await.expect_err("Users are unavailable");

        assert!(matches!(err, UseCaseError::StorageError));
        assert_eq!(
            PlannerError::from(err).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
