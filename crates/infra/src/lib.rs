mod config;
mod repos;

pub use config::Config;
pub use repos::{IEventRepo, IUserRepo, Repos};
use tracing::warn;

#[derive(Clone)]
pub struct PlannerContext {
    pub repos: Repos,
    pub config: Config,
}

struct ContextParams {
    pub postgres_connection_string: Option<String>,
}

impl PlannerContext {
    async fn create(params: ContextParams) -> Self {
        let repos = match params.postgres_connection_string {
            Some(connection_string) => Repos::create_postgres(&connection_string)
                .await
                .expect("Postgres credentials must be valid"),
            None => {
                warn!("DATABASE_URL is not set, events will only be stored in memory.");
                Repos::create_inmemory()
            }
        };
        Self {
            repos,
            config: Config::new(),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> PlannerContext {
    PlannerContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await
}

fn get_psql_connection_string() -> Option<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING).ok()
}
