use super::IUserRepo;
use planner_domain::{User, ID};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_uid: Uuid,
    name: String,
}

impl From<UserRaw> for User {
    fn from(u: UserRaw) -> Self {
        Self {
            id: u.user_uid.into(),
            name: u.name,
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users(user_uid, name)
            VALUES($1, $2)
            "#,
        )
        .bind(user.id.inner_ref())
        .bind(&user.name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        let user: Option<UserRaw> = sqlx::query_as(
            r#"
            SELECT * FROM users AS u
            WHERE u.user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user.map(|u| u.into()))
    }
}
