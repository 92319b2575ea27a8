//! Transactional storage of a contact submission.
//!
//! A submission is one contact row plus its availability slots. Either all
//! of them are stored or none: partial writes must never be visible.

use async_trait::async_trait;
use eyre::Result;
use sqlx::{Postgres, Transaction};
use tracing::{error, info, warn};
use uuid::Uuid;

use agence_core::models::contact::NewContact;

use crate::{
    DbPool,
    repositories::{contact, disponibilite},
};

/// Storage seam used by the contact endpoint.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Stores the contact and its slots in a single transaction and
    /// returns the new contact id. Empty slot strings are skipped.
    async fn save_submission(&self, contact: &NewContact, disponibilites: &[String])
    -> Result<Uuid>;

    /// Cheap round trip to check the store is reachable.
    async fn ping(&self) -> Result<()>;
}

pub struct PgContactRepository {
    pool: DbPool,
}

impl PgContactRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn save_submission(
        &self,
        contact: &NewContact,
        disponibilites: &[String],
    ) -> Result<Uuid> {
        let mut tx = self.pool.begin().await?;

        match write_submission(&mut tx, contact, disponibilites).await {
            Ok(contact_id) => {
                tx.commit().await?;
                info!(%contact_id, slots = disponibilites.len(), "Contact submission committed");
                Ok(contact_id)
            }
            Err(err) => {
                warn!("Rolling back contact submission: {}", err);
                if let Err(rollback_err) = tx.rollback().await {
                    error!("Rollback failed: {}", rollback_err);
                }
                Err(err)
            }
        }
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

async fn write_submission(
    tx: &mut Transaction<'_, Postgres>,
    new_contact: &NewContact,
    disponibilites: &[String],
) -> Result<Uuid> {
    let contact_id = contact::insert_contact(&mut **tx, new_contact).await?;

    for slot in disponibilites.iter().filter(|slot| !slot.is_empty()) {
        disponibilite::insert_disponibilite(&mut **tx, contact_id, slot).await?;
    }

    Ok(contact_id)
}
