//! Storage for contact form submissions: schema, row models and the
//! repository the contact endpoint writes through.

pub mod mock;
pub mod models;
pub mod repositories;
pub mod schema;

use std::time::Duration;

use eyre::{Result, WrapErr};
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};

pub type DbPool = Pool<Postgres>;

/// Connections kept by the pool; each submission holds one for its transaction.
const MAX_CONNECTIONS: u32 = 5;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .wrap_err("Failed to connect to the contact database")
}
