use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::room::Room;

/// Date-range availability queries over rooms and their active reservations.
///
/// Date ranges are half-open: `[check_in, check_out)`. A checkout day equal
/// to another reservation's check-in day does not conflict, so back-to-back
/// bookings are allowed.
#[derive(Clone)]
pub struct Availability {
    pool: SqlitePool,
}

impl Availability {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Rooms that are in `available` status and have no confirmed or
    /// checked-in reservation overlapping the queried range, ordered by room
    /// number. Callers validate that `check_in < check_out`.
    pub async fn search(&self, check_in: NaiveDate, check_out: NaiveDate) -> Result<Vec<Room>> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT r.* FROM rooms r
            WHERE r.status = 'available'
            AND r.room_id NOT IN (
                SELECT room_id FROM reservations
                WHERE status IN ('confirmed', 'checked_in')
                AND (
                    (check_in_date <= ? AND check_out_date > ?) OR
                    (check_in_date < ? AND check_out_date >= ?) OR
                    (check_in_date >= ? AND check_out_date <= ?)
                )
            )
            ORDER BY r.room_number
            "#,
        )
        .bind(check_in)
        .bind(check_in)
        .bind(check_out)
        .bind(check_out)
        .bind(check_in)
        .bind(check_out)
        .fetch_all(&self.pool)
        .await?;
        Ok(rooms)
    }
}
