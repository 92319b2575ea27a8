use color_eyre::eyre::Result;
use dotenv::dotenv;
use agence_api::config::ApiConfig;
use agence_db::{create_pool, schema::initialize_database};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let config = ApiConfig::from_env()?;

    let db_pool = create_pool(&config.database_url).await?;

    // Tables are created on startup when missing
    initialize_database(&db_pool).await?;

    agence_api::start_server(config, db_pool).await?;

    Ok(())
}
