use crate::models::DbDisponibilite;
use eyre::Result;
use sqlx::{PgExecutor, Pool, Postgres};
use uuid::Uuid;

/// Inserts one availability slot under `contact_id`.
///
/// The slot arrives as text and is cast by PostgreSQL, so a malformed
/// timestamp fails here rather than earlier.
pub async fn insert_disponibilite(
    executor: impl PgExecutor<'_>,
    contact_id: Uuid,
    date_disponibilite: &str,
) -> Result<Uuid> {
    let id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO disponibilites (contact_id, date_disponibilite)
        VALUES ($1, $2::timestamp)
        RETURNING id
        "#,
    )
    .bind(contact_id)
    .bind(date_disponibilite)
    .fetch_one(executor)
    .await?;

    Ok(id)
}

pub async fn get_disponibilites_by_contact_id(
    pool: &Pool<Postgres>,
    contact_id: Uuid,
) -> Result<Vec<DbDisponibilite>> {
    let disponibilites = sqlx::query_as::<_, DbDisponibilite>(
        r#"
        SELECT id, contact_id, date_disponibilite
        FROM disponibilites
        WHERE contact_id = $1
        ORDER BY date_disponibilite ASC
        "#,
    )
    .bind(contact_id)
    .fetch_all(pool)
    .await?;

    Ok(disponibilites)
}

/// Slots whose parent contact carries `email`. Used to check that a
/// rolled back submission left nothing behind.
pub async fn count_disponibilites_by_email(pool: &Pool<Postgres>, email: &str) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM disponibilites d
        JOIN contacts c ON c.id = d.contact_id
        WHERE c.email = $1
        "#,
    )
    .bind(email)
    .fetch_one(pool)
    .await?;

    Ok(count)
}
