use std::sync::Arc;

use agenda_api::{config::ApiConfig, ApiState};
use agenda_core::{
    clock::SystemClock,
    memory::{InMemoryBookingStore, StaticRoleDirectory},
};
use agenda_db::{
    create_pool,
    schema::initialize_database,
    store::{PgBookingStore, PgRoleDirectory},
};
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    agenda_api::init_tracing(config.log_level)?;

    let state = match &config.database_url {
        Some(database_url) => {
            // Create database connection pool
            let db_pool = create_pool(database_url).await?;

            // Initialize database schema
            initialize_database(&db_pool).await?;

            ApiState::new(
                config.slot_catalog.clone(),
                Arc::new(PgBookingStore::new(db_pool.clone())),
                Arc::new(PgRoleDirectory::new(db_pool)),
                Arc::new(SystemClock),
                "postgres",
            )
        }
        None => {
            warn!("DATABASE_URL not set, bookings are kept in memory and lost on restart");
            ApiState::new(
                config.slot_catalog.clone(),
                Arc::new(InMemoryBookingStore::new()),
                Arc::new(StaticRoleDirectory::new(config.admin_ids.clone())),
                Arc::new(SystemClock),
                "memory",
            )
        }
    };

    info!(
        slots = config.slot_catalog.len(),
        store = state.store_backend,
        "Agenda configured"
    );

    // Start API server
    agenda_api::start_server(config, Arc::new(state)).await?;

    Ok(())
}
