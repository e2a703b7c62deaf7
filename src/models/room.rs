use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use validator::Validate;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            "maintenance" => Ok(Self::Maintenance),
            other => Err(Error::invalid_input(format!("invalid room status: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub room_id: i64,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub capacity: i64,
    pub amenities: Option<String>,
    pub status: RoomStatus,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoom {
    pub room_number: String,
    pub room_type: String,
    #[validate(range(min = 0.0))]
    pub price_per_night: f64,
    #[validate(range(min = 1))]
    pub capacity: i64,
    pub amenities: Option<String>,
    pub status: Option<RoomStatus>,
}

/// Room registry. Room numbers are unique; status transitions happen either
/// through the reservation lifecycle or through `set_status` directly, which
/// is allowed even while the room has active reservations.
#[derive(Clone)]
pub struct Rooms {
    pool: SqlitePool,
}

impl Rooms {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn add(
        &self,
        room_number: &str,
        room_type: &str,
        price_per_night: f64,
        capacity: i64,
        amenities: Option<&str>,
        status: RoomStatus,
    ) -> Result<i64> {
        if price_per_night < 0.0 {
            return Err(Error::invalid_input("price per night must not be negative"));
        }
        if capacity <= 0 {
            return Err(Error::invalid_input("capacity must be positive"));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO rooms (room_number, room_type, price_per_night, capacity, amenities, status)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(room_number)
        .bind(room_type)
        .bind(price_per_night)
        .bind(capacity)
        .bind(amenities)
        .bind(status)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(Error::DuplicateRoomNumber(room_number.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get(&self, room_id: i64) -> Result<Option<Room>> {
        let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE room_id = ?")
            .bind(room_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(room)
    }

    pub async fn list(&self) -> Result<Vec<Room>> {
        let rooms = sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY room_number")
            .fetch_all(&self.pool)
            .await?;
        Ok(rooms)
    }

    pub async fn list_by_status(&self, status: RoomStatus) -> Result<Vec<Room>> {
        let rooms =
            sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE status = ? ORDER BY room_number")
                .bind(status)
                .fetch_all(&self.pool)
                .await?;
        Ok(rooms)
    }

    pub async fn set_status(&self, room_id: i64, status: RoomStatus) -> Result<()> {
        let done = sqlx::query("UPDATE rooms SET status = ? WHERE room_id = ?")
            .bind(status)
            .bind(room_id)
            .execute(&self.pool)
            .await?;

        if done.rows_affected() == 0 {
            return Err(Error::NotFound {
                entity: "room",
                id: room_id,
            });
        }
        Ok(())
    }
}
