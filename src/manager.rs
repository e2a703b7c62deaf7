use chrono::NaiveDate;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::availability::Availability;
use crate::error::{Error, Result};
use crate::models::guest::Guests;
use crate::models::payment::Payments;
use crate::models::reservation::{ReservationDetails, ReservationStatus, Reservations};
use crate::models::room::Rooms;

#[derive(Debug, Clone, Serialize)]
pub struct RoomSummary {
    pub total: i64,
    pub available: i64,
    pub occupied: i64,
    pub maintenance: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_rooms: i64,
    pub available_rooms: i64,
    pub occupied_rooms: i64,
    pub maintenance_rooms: i64,
    pub total_revenue: f64,
    pub active_reservations: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub recent_reservations: Vec<ReservationDetails>,
}

/// Booking facade composing the room registry, guest directory, availability
/// engine, reservation lifecycle and payment ledger. Built once at startup
/// from the shared pool; each component holds its own handle.
#[derive(Clone)]
pub struct HotelManager {
    pool: SqlitePool,
    pub rooms: Rooms,
    pub guests: Guests,
    pub availability: Availability,
    pub reservations: Reservations,
    pub payments: Payments,
}

impl HotelManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            rooms: Rooms::new(pool.clone()),
            guests: Guests::new(pool.clone()),
            availability: Availability::new(pool.clone()),
            reservations: Reservations::new(pool.clone()),
            payments: Payments::new(pool.clone()),
            pool,
        }
    }

    /// The booking workflow: resolve or register the guest, re-validate the
    /// chosen room against the availability set for the range, then create
    /// the reservation in `confirmed` with the total fixed at
    /// `price_per_night x nights`.
    ///
    /// Returns `Ok(None)` when the room is unknown or not available for the
    /// range, regardless of what the caller's UI previously listed.
    pub async fn reserve(
        &self,
        guest_name: &str,
        phone: &str,
        room_id: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
        email: Option<&str>,
        address: Option<&str>,
    ) -> Result<Option<i64>> {
        let nights = (check_out - check_in).num_days();
        if nights <= 0 {
            return Err(Error::invalid_input("check-out must be after check-in"));
        }

        let guest_id = self.guests.register(guest_name, phone, email, address).await?;

        let available = self.availability.search(check_in, check_out).await?;
        let Some(room) = available.into_iter().find(|r| r.room_id == room_id) else {
            return Ok(None);
        };

        let total_amount = room.price_per_night * nights as f64;
        let reservation_id = self
            .reservations
            .create(guest_id, room_id, check_in, check_out, total_amount)
            .await?;

        log::info!(
            "reserved room {} for guest {guest_id}: {nights} night(s), total {total_amount:.2}",
            room.room_number
        );
        Ok(Some(reservation_id))
    }

    pub async fn check_in_guest(&self, reservation_id: i64) -> Result<bool> {
        self.reservations.check_in(reservation_id).await
    }

    /// Checkout: records exactly one completed payment of the reservation's
    /// total, then runs the checked_in -> checked_out transition.
    pub async fn check_out_guest(&self, reservation_id: i64, payment_method: &str) -> Result<bool> {
        let Some(details) = self.reservations.get(reservation_id).await? else {
            return Ok(false);
        };
        if details.status != ReservationStatus::CheckedIn {
            return Ok(false);
        }

        self.payments
            .record(reservation_id, details.total_amount, payment_method)
            .await?;
        self.reservations.check_out(reservation_id).await
    }

    pub async fn cancel_reservation(&self, reservation_id: i64) -> Result<bool> {
        self.reservations.cancel(reservation_id).await
    }

    pub async fn summary(&self) -> Result<RoomSummary> {
        let row: (i64, i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*),
                   COALESCE(SUM(CASE WHEN status = 'available' THEN 1 ELSE 0 END), 0),
                   COALESCE(SUM(CASE WHEN status = 'occupied' THEN 1 ELSE 0 END), 0),
                   COALESCE(SUM(CASE WHEN status = 'maintenance' THEN 1 ELSE 0 END), 0)
            FROM rooms
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(RoomSummary {
            total: row.0,
            available: row.1,
            occupied: row.2,
            maintenance: row.3,
        })
    }

    /// Sum of totals over checked-out reservations.
    pub async fn revenue(&self) -> Result<f64> {
        let total = sqlx::query_scalar(
            "SELECT COALESCE(SUM(total_amount), 0.0) FROM reservations WHERE status = 'checked_out'",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    /// Reservations currently counting against availability.
    pub async fn active_count(&self) -> Result<i64> {
        let count = sqlx::query_scalar(
            "SELECT COUNT(*) FROM reservations WHERE status IN ('confirmed', 'checked_in')",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    pub async fn dashboard(&self) -> Result<Dashboard> {
        let summary = self.summary().await?;
        let total_revenue = self.revenue().await?;
        let active_reservations = self.active_count().await?;
        let mut recent_reservations = self.reservations.list(None).await?;
        recent_reservations.truncate(5);

        Ok(Dashboard {
            stats: DashboardStats {
                total_rooms: summary.total,
                available_rooms: summary.available,
                occupied_rooms: summary.occupied,
                maintenance_rooms: summary.maintenance,
                total_revenue,
                active_reservations,
            },
            recent_reservations,
        })
    }
}
