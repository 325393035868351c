mod event;
mod shared;
mod user;

pub use event::IEventRepo;
use event::{InMemoryEventRepo, PostgresEventRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
pub use user::IUserRepo;
use user::{InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub events: Arc<dyn IEventRepo>,
    pub users: Arc<dyn IUserRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        info!("DB RUNNING MIGRATIONS ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB RUNNING MIGRATIONS ... [done]");

        Ok(Self {
            events: Arc::new(PostgresEventRepo::new(pool.clone())),
            users: Arc::new(PostgresUserRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            events: Arc::new(InMemoryEventRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
        }
    }
}
