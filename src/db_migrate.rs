use agenda_db::{repositories::user::upsert_user_role, schema::initialize_database};
use color_eyre::eyre::{eyre, Result};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    tracing::subscriber::set_global_default(FmtSubscriber::new())?;

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| eyre!("DATABASE_URL environment variable not set"))?;

    info!("Connecting to database...");
    let db_pool = agenda_db::create_pool(&database_url).await?;

    initialize_database(&db_pool).await?;

    // Grant the administrator role to the listed users
    let admin_ids = std::env::var("AGENDA_ADMIN_IDS").unwrap_or_default();
    for id in admin_ids.split(',').map(str::trim).filter(|id| !id.is_empty()) {
        upsert_user_role(&db_pool, id, None, None, "admin").await?;
        info!(user = %id, "Granted admin role");
    }

    Ok(())
}
