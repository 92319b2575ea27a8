use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

/// Creates the contact tables if they do not exist yet.
///
/// Safe to run on every start: existing tables and rows are left alone.
pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create contacts table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            civilite VARCHAR(8) NOT NULL,
            nom VARCHAR(255) NOT NULL,
            prenom VARCHAR(255) NOT NULL,
            email VARCHAR(254) NOT NULL,
            telephone VARCHAR(64) NOT NULL DEFAULT '',
            message TEXT NOT NULL DEFAULT '',
            motif_contact VARCHAR(32) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create disponibilites table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS disponibilites (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            contact_id UUID NOT NULL REFERENCES contacts(id),
            date_disponibilite TIMESTAMP NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_disponibilites_contact_id ON disponibilites(contact_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
