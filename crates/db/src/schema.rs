use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table; only the role is read by the scheduler
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id VARCHAR(255) PRIMARY KEY,
            display_name VARCHAR(255) NULL,
            email VARCHAR(255) NULL,
            role VARCHAR(32) NOT NULL DEFAULT 'user',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_role CHECK (role IN ('user', 'admin'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table; the unique constraint is what keeps one booking per slot
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            booking_date DATE NOT NULL,
            slot TIME NOT NULL,
            requester_id VARCHAR(255) NOT NULL,
            requester_display_name VARCHAR(255) NOT NULL,
            requester_contact VARCHAR(255) NOT NULL,
            note TEXT NOT NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'scheduled',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT bookings_date_slot_key UNIQUE (booking_date, slot),
            CONSTRAINT note_not_blank CHECK (btrim(note) <> '')
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes, one statement per query
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_bookings_requester_id ON bookings(requester_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_bookings_booking_date ON bookings(booking_date)")
        .execute(pool)
        .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
