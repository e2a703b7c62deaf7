use crate::error::{Error, Result};
use crate::manager::HotelManager;
use crate::models::room::RoomStatus;

const SAMPLE_ROOMS: &[(&str, &str, f64, i64, &str)] = &[
    ("101", "Single", 80.00, 1, "WiFi, TV, AC"),
    ("102", "Single", 80.00, 1, "WiFi, TV, AC"),
    ("201", "Double", 120.00, 2, "WiFi, TV, AC, Mini Bar"),
    ("202", "Double", 120.00, 2, "WiFi, TV, AC, Mini Bar"),
    ("301", "Suite", 200.00, 4, "WiFi, TV, AC, Mini Bar, Living Room"),
    ("302", "Suite", 200.00, 4, "WiFi, TV, AC, Mini Bar, Living Room"),
    (
        "401",
        "Presidential",
        500.00,
        6,
        "WiFi, TV, AC, Mini Bar, Living Room, Jacuzzi, Balcony",
    ),
];

/// Populates the sample rooms for demos. Rooms that already exist are
/// skipped, so seeding can be re-run.
pub async fn run(manager: &HotelManager) -> Result<()> {
    log::info!("Initializing sample data...");

    for (room_number, room_type, price, capacity, amenities) in SAMPLE_ROOMS {
        let added = manager
            .rooms
            .add(
                room_number,
                room_type,
                *price,
                *capacity,
                Some(amenities),
                RoomStatus::Available,
            )
            .await;

        match added {
            Ok(_) => println!("Added room {room_number}"),
            Err(Error::DuplicateRoomNumber(_)) => {
                log::warn!("room {room_number} already exists, skipping");
            }
            Err(e) => return Err(e),
        }
    }

    println!("Sample data initialization complete!");
    Ok(())
}
