use crate::models::DbContact;
use agence_core::models::contact::NewContact;
use eyre::Result;
use sqlx::{PgExecutor, Pool, Postgres};
use uuid::Uuid;

/// Inserts one contact row and returns the id the store generated.
///
/// `created_at` is left to the column default.
pub async fn insert_contact(executor: impl PgExecutor<'_>, contact: &NewContact) -> Result<Uuid> {
    tracing::debug!(
        "Inserting contact: motif={}, has_phone={}",
        contact.motif_contact,
        !contact.telephone.is_empty()
    );

    let id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO contacts (civilite, nom, prenom, email, telephone, message, motif_contact)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(&contact.civilite)
    .bind(&contact.nom)
    .bind(&contact.prenom)
    .bind(&contact.email)
    .bind(&contact.telephone)
    .bind(&contact.message)
    .bind(&contact.motif_contact)
    .fetch_one(executor)
    .await?;

    tracing::debug!("Contact inserted: id={}", id);
    Ok(id)
}

pub async fn get_contact_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbContact>> {
    let contact = sqlx::query_as::<_, DbContact>(
        r#"
        SELECT id, civilite, nom, prenom, email, telephone, message, motif_contact, created_at
        FROM contacts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(contact)
}

pub async fn count_contacts_by_email(pool: &Pool<Postgres>, email: &str) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM contacts
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_one(pool)
    .await?;

    Ok(count)
}
