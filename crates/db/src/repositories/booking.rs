use crate::models::DbBooking;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub struct InsertBooking<'a> {
    pub booking_date: NaiveDate,
    pub slot: NaiveTime,
    pub requester_id: &'a str,
    pub requester_display_name: &'a str,
    pub requester_contact: &'a str,
    pub note: &'a str,
    pub created_at: DateTime<Utc>,
}

/// Inserts a booking unless its `(booking_date, slot)` is already taken.
///
/// Returns `None` when the unique constraint rejected the row. The check and
/// the write are a single statement, so concurrent callers cannot both win.
pub async fn insert_booking(
    pool: &Pool<Postgres>,
    booking: &InsertBooking<'_>,
) -> Result<Option<DbBooking>> {
    let id = Uuid::new_v4();

    tracing::debug!(
        %id,
        date = %booking.booking_date,
        slot = %booking.slot,
        requester = booking.requester_id,
        "Inserting booking"
    );

    let inserted = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (
            id, booking_date, slot, requester_id, requester_display_name,
            requester_contact, note, status, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'scheduled', $8)
        ON CONFLICT ON CONSTRAINT bookings_date_slot_key DO NOTHING
        RETURNING id, booking_date, slot, requester_id, requester_display_name,
                  requester_contact, note, status, created_at
        "#,
    )
    .bind(id)
    .bind(booking.booking_date)
    .bind(booking.slot)
    .bind(booking.requester_id)
    .bind(booking.requester_display_name)
    .bind(booking.requester_contact)
    .bind(booking.note)
    .bind(booking.created_at)
    .fetch_optional(pool)
    .await?;

    if inserted.is_none() {
        tracing::debug!(
            date = %booking.booking_date,
            slot = %booking.slot,
            "Booking rejected, slot taken"
        );
    }

    Ok(inserted)
}

pub async fn get_bookings_by_date(
    pool: &Pool<Postgres>,
    booking_date: NaiveDate,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, booking_date, slot, requester_id, requester_display_name,
               requester_contact, note, status, created_at
        FROM bookings
        WHERE booking_date = $1
        ORDER BY slot ASC
        "#,
    )
    .bind(booking_date)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn get_bookings_by_requester(
    pool: &Pool<Postgres>,
    requester_id: &str,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, booking_date, slot, requester_id, requester_display_name,
               requester_contact, note, status, created_at
        FROM bookings
        WHERE requester_id = $1
        ORDER BY booking_date ASC, slot ASC
        "#,
    )
    .bind(requester_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn get_all_bookings(pool: &Pool<Postgres>) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, booking_date, slot, requester_id, requester_display_name,
               requester_contact, note, status, created_at
        FROM bookings
        ORDER BY booking_date DESC, slot ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// Returns whether a row was deleted.
pub async fn delete_booking_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    tracing::debug!(%id, "Deleting booking");

    let result = sqlx::query(
        r#"
        DELETE FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
