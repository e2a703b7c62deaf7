use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Refunded => "refunded",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Payment {
    pub payment_id: i64,
    pub reservation_id: i64,
    pub amount: f64,
    pub payment_method: String,
    pub payment_status: PaymentStatus,
    pub payment_date: NaiveDateTime,
}

/// Payment ledger. Entries are recorded at checkout and never mutated.
#[derive(Clone)]
pub struct Payments {
    pool: SqlitePool,
}

impl Payments {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn record(&self, reservation_id: i64, amount: f64, method: &str) -> Result<i64> {
        let done = sqlx::query(
            r#"
            INSERT INTO payments (reservation_id, amount, payment_method, payment_status)
            VALUES (?, ?, ?, 'completed')
            "#,
        )
        .bind(reservation_id)
        .bind(amount)
        .bind(method)
        .execute(&self.pool)
        .await?;
        Ok(done.last_insert_rowid())
    }

    pub async fn for_reservation(&self, reservation_id: i64) -> Result<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments WHERE reservation_id = ? ORDER BY payment_date, payment_id",
        )
        .bind(reservation_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(payments)
    }
}
