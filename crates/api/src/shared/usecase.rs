use planner_infra::PlannerContext;
use std::fmt::Debug;
use tracing::{error, info_span, Instrument};

#[async_trait::async_trait(?Send)]
pub trait UseCase: Debug {
    type Response;
    type Error;

    const NAME: &'static str;

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error>;
}

pub async fn execute<U>(mut usecase: U, ctx: &PlannerContext) -> Result<U::Response, U::Error>
where
    U: UseCase,
    U::Error: Debug,
{
    let span = info_span!("Executing usecase", usecase = U::NAME, args = ?usecase);
    let res = usecase.execute(ctx).instrument(span).await;

    if let Err(e) = &res {
        error!("Use case {} error: {:?}", U::NAME, e);
    }

    res
}
