use planner_domain::{User, ID};
use planner_infra::{Config, IUserRepo, PlannerContext, Repos};
use std::sync::Arc;

/// User repository whose database can not be reached
pub struct UnavailableUserRepo;

#[async_trait::async_trait]
impl IUserRepo for UnavailableUserRepo {
    async fn insert(&self, _user: &User) -> anyhow::Result<()> {
        Err(anyhow::Error::msg("connection refused"))
    }

    async fn find(&self, _user_id: &ID) -> anyhow::Result<Option<User>> {
        Err(anyhow::Error::msg("connection refused"))
    }
}

/// In-memory events, unavailable users
pub fn context_with_unavailable_users() -> PlannerContext {
    let repos = Repos::create_inmemory();
    PlannerContext {
        repos: Repos {
            events: repos.events,
            users: Arc::new(UnavailableUserRepo),
        },
        config: Config::new(),
    }
}
