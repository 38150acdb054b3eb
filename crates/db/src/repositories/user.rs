use crate::models::DbUser;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: &str) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, display_name, email, role, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Creates the user or changes the role of an existing one.
pub async fn upsert_user_role(
    pool: &Pool<Postgres>,
    id: &str,
    display_name: Option<&str>,
    email: Option<&str>,
    role: &str,
) -> Result<DbUser> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, display_name, email, role)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (id) DO UPDATE SET role = EXCLUDED.role
        RETURNING id, display_name, email, role, created_at
        "#,
    )
    .bind(id)
    .bind(display_name)
    .bind(email)
    .bind(role)
    .fetch_one(pool)
    .await?;

    Ok(user)
}
