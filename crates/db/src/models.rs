use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbContact {
    pub id: Uuid,
    pub civilite: String,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    pub message: String,
    pub motif_contact: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDisponibilite {
    pub id: Uuid,
    pub contact_id: Uuid,
    pub date_disponibilite: NaiveDateTime,
}
