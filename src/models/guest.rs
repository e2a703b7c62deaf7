use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Guest {
    pub guest_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Guest directory, deduplicated by phone number.
#[derive(Clone)]
pub struct Guests {
    pool: SqlitePool,
}

impl Guests {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Registers a guest, or returns the existing guest's id when the phone
    /// number is already known. Existing records are never updated.
    pub async fn register(
        &self,
        name: &str,
        phone: &str,
        email: Option<&str>,
        address: Option<&str>,
    ) -> Result<i64> {
        if let Some(existing) = self.by_phone(phone).await? {
            return Ok(existing.guest_id);
        }

        let done = sqlx::query("INSERT INTO guests (name, email, phone, address) VALUES (?, ?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(phone)
            .bind(address)
            .execute(&self.pool)
            .await?;
        Ok(done.last_insert_rowid())
    }

    pub async fn get(&self, guest_id: i64) -> Result<Option<Guest>> {
        let guest = sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE guest_id = ?")
            .bind(guest_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(guest)
    }

    pub async fn by_phone(&self, phone: &str) -> Result<Option<Guest>> {
        let guest = sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE phone = ?")
            .bind(phone)
            .fetch_optional(&self.pool)
            .await?;
        Ok(guest)
    }

    pub async fn list(&self) -> Result<Vec<Guest>> {
        let guests = sqlx::query_as::<_, Guest>("SELECT * FROM guests ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(guests)
    }
}
