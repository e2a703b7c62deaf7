#![allow(dead_code)]

use chrono::NaiveDate;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use innkeeper::db;
use innkeeper::models::room::RoomStatus;
use innkeeper::HotelManager;

/// Fresh in-memory store with the schema applied. A single connection keeps
/// every query on the same in-memory database.
pub async fn setup() -> (SqlitePool, HotelManager) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    db::MIGRATOR
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let manager = HotelManager::new(pool.clone());
    (pool, manager)
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("bad test date")
}

pub async fn add_room(manager: &HotelManager, number: &str, room_type: &str, price: f64) -> i64 {
    manager
        .rooms
        .add(number, room_type, price, 2, Some("WiFi, TV"), RoomStatus::Available)
        .await
        .expect("failed to add room")
}

/// Books `room_id` for the range and returns the reservation id; panics if
/// the room turns out to be unavailable.
pub async fn reserve(
    manager: &HotelManager,
    room_id: i64,
    phone: &str,
    check_in: &str,
    check_out: &str,
) -> i64 {
    manager
        .reserve(
            "Test Guest",
            phone,
            room_id,
            date(check_in),
            date(check_out),
            None,
            None,
        )
        .await
        .expect("reserve failed")
        .expect("room unexpectedly unavailable")
}
