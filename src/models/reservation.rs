use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use validator::Validate;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "checked_in" => Ok(Self::CheckedIn),
            "checked_out" => Ok(Self::CheckedOut),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(Error::invalid_input(format!(
                "invalid reservation status: {other}"
            ))),
        }
    }
}

/// Reservation row joined with the guest and room it references.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReservationDetails {
    pub reservation_id: i64,
    pub guest_id: i64,
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: ReservationStatus,
    pub total_amount: f64,
    pub created_at: NaiveDateTime,
    pub guest_name: String,
    pub guest_phone: String,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservation {
    pub guest_name: String,
    pub phone: String,
    pub room_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[validate(email)]
    pub email: Option<String>,
    pub address: Option<String>,
}

const DETAILS_COLUMNS: &str = r#"
    SELECT r.reservation_id, r.guest_id, r.room_id, r.check_in_date, r.check_out_date,
           r.status, r.total_amount, r.created_at,
           g.name AS guest_name, g.phone AS guest_phone,
           rm.room_number, rm.room_type, rm.price_per_night
    FROM reservations r
    JOIN guests g ON r.guest_id = g.guest_id
    JOIN rooms rm ON r.room_id = rm.room_id
"#;

/// Reservation lifecycle: pending, confirmed, checked_in, checked_out,
/// cancelled. checked_out and cancelled are terminal. Transitions are guarded
/// on the current status and apply their room side effect in the same
/// transaction; a failed guard returns `Ok(false)` and changes nothing.
#[derive(Clone)]
pub struct Reservations {
    pool: SqlitePool,
}

impl Reservations {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a reservation directly in `confirmed`; the booking workflow
    /// has no separate approval step. The total amount is fixed here and
    /// never recomputed.
    pub async fn create(
        &self,
        guest_id: i64,
        room_id: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
        total_amount: f64,
    ) -> Result<i64> {
        let done = sqlx::query(
            r#"
            INSERT INTO reservations (guest_id, room_id, check_in_date, check_out_date, total_amount, status)
            VALUES (?, ?, ?, ?, ?, 'confirmed')
            "#,
        )
        .bind(guest_id)
        .bind(room_id)
        .bind(check_in)
        .bind(check_out)
        .bind(total_amount)
        .execute(&self.pool)
        .await?;
        Ok(done.last_insert_rowid())
    }

    pub async fn get(&self, reservation_id: i64) -> Result<Option<ReservationDetails>> {
        let query = format!("{DETAILS_COLUMNS} WHERE r.reservation_id = ?");
        let details = sqlx::query_as::<_, ReservationDetails>(&query)
            .bind(reservation_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(details)
    }

    /// All reservations, newest creation first, optionally filtered by exact
    /// status. Id breaks ties within a clock second.
    pub async fn list(&self, status: Option<ReservationStatus>) -> Result<Vec<ReservationDetails>> {
        let reservations = match status {
            Some(status) => {
                let query = format!(
                    "{DETAILS_COLUMNS} WHERE r.status = ? ORDER BY r.created_at DESC, r.reservation_id DESC"
                );
                sqlx::query_as::<_, ReservationDetails>(&query)
                    .bind(status)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query =
                    format!("{DETAILS_COLUMNS} ORDER BY r.created_at DESC, r.reservation_id DESC");
                sqlx::query_as::<_, ReservationDetails>(&query)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(reservations)
    }

    /// confirmed -> checked_in; the room becomes occupied.
    pub async fn check_in(&self, reservation_id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT room_id FROM reservations WHERE reservation_id = ? AND status = 'confirmed'",
        )
        .bind(reservation_id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some((room_id,)) = row else {
            return Ok(false);
        };

        sqlx::query("UPDATE reservations SET status = 'checked_in' WHERE reservation_id = ?")
            .bind(reservation_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE rooms SET status = 'occupied' WHERE room_id = ?")
            .bind(room_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// checked_in -> checked_out; the room becomes available again.
    pub async fn check_out(&self, reservation_id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT room_id FROM reservations WHERE reservation_id = ? AND status = 'checked_in'",
        )
        .bind(reservation_id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some((room_id,)) = row else {
            return Ok(false);
        };

        sqlx::query("UPDATE reservations SET status = 'checked_out' WHERE reservation_id = ?")
            .bind(reservation_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE rooms SET status = 'available' WHERE room_id = ?")
            .bind(room_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// pending/confirmed -> cancelled. A reservation that passes the guard
    /// was never checked in, so room status is left alone.
    pub async fn cancel(&self, reservation_id: i64) -> Result<bool> {
        let done = sqlx::query(
            r#"
            UPDATE reservations SET status = 'cancelled'
            WHERE reservation_id = ? AND status IN ('pending', 'confirmed')
            "#,
        )
        .bind(reservation_id)
        .execute(&self.pool)
        .await?;
        Ok(done.rows_affected() == 1)
    }
}
