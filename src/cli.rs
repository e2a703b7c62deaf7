//! Interactive text menu over the booking facade.
//!
//! Every action reports its own failures; nothing here is fatal except a
//! broken stdin/stdout.

use std::io::{self, Write};

use anyhow::Context;
use chrono::NaiveDate;

use crate::error::Error;
use crate::manager::HotelManager;
use crate::models::room::RoomStatus;

pub async fn run(manager: &HotelManager) -> anyhow::Result<()> {
    println!("Welcome to the hotel management system!");

    loop {
        print_menu();
        let choice = prompt("\nEnter your choice")?;

        let result = match choice.as_str() {
            "0" => {
                println!("\nGoodbye!");
                return Ok(());
            }
            "1" => add_room(manager).await,
            "2" => view_rooms(manager).await,
            "3" => check_availability(manager).await,
            "4" => make_reservation(manager).await,
            "5" => view_reservations(manager).await,
            "6" => check_in_guest(manager).await,
            "7" => check_out_guest(manager).await,
            "8" => view_guests(manager).await,
            "9" => room_status_summary(manager).await,
            "10" => cancel_reservation(manager).await,
            _ => {
                println!("Invalid choice! Please try again.");
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("Error: {e:#}");
        }

        prompt("\nPress Enter to continue")?;
    }
}

fn print_menu() {
    println!("\n{}", "=".repeat(50));
    println!("    HOTEL MANAGEMENT SYSTEM");
    println!("{}", "=".repeat(50));
    println!("1. Add Room");
    println!("2. View All Rooms");
    println!("3. Check Room Availability");
    println!("4. Make Reservation");
    println!("5. View Reservations");
    println!("6. Check In Guest");
    println!("7. Check Out Guest");
    println!("8. View Guests");
    println!("9. Room Status Summary");
    println!("10. Cancel Reservation");
    println!("0. Exit");
    println!("{}", "=".repeat(50));
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{label}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read input")?;
    Ok(line.trim().to_string())
}

fn prompt_optional(label: &str) -> anyhow::Result<Option<String>> {
    let value = prompt(label)?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

fn prompt_date(label: &str) -> anyhow::Result<NaiveDate> {
    let value = prompt(label)?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .with_context(|| format!("invalid date (expected YYYY-MM-DD): {value}"))
}

async fn add_room(manager: &HotelManager) -> anyhow::Result<()> {
    println!("\n--- Add New Room ---");
    let room_number = prompt("Room Number")?;
    let room_type = prompt("Room Type (Single/Double/Suite/Presidential)")?;
    let price: f64 = prompt("Price per Night")?.parse().context("invalid price")?;
    let capacity: i64 = prompt("Capacity (number of guests)")?
        .parse()
        .context("invalid capacity")?;
    let amenities = prompt_optional("Amenities (comma-separated, optional)")?;

    match manager
        .rooms
        .add(
            &room_number,
            &room_type,
            price,
            capacity,
            amenities.as_deref(),
            RoomStatus::Available,
        )
        .await
    {
        Ok(_) => println!("Room {room_number} added successfully!"),
        Err(Error::DuplicateRoomNumber(_)) => println!("Error: Room number already exists!"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

async fn view_rooms(manager: &HotelManager) -> anyhow::Result<()> {
    println!("\n--- All Rooms ---");
    let rooms = manager.rooms.list().await?;
    if rooms.is_empty() {
        println!("No rooms found.");
        return Ok(());
    }

    println!(
        "{:<10} {:<15} {:<15} {:<10} {:<12}",
        "Room #", "Type", "Price/Night", "Capacity", "Status"
    );
    println!("{}", "-".repeat(70));
    for room in rooms {
        println!(
            "{:<10} {:<15} ${:<14.2} {:<10} {:<12}",
            room.room_number, room.room_type, room.price_per_night, room.capacity, room.status
        );
    }
    Ok(())
}

async fn check_availability(manager: &HotelManager) -> anyhow::Result<()> {
    println!("\n--- Check Room Availability ---");
    let check_in = prompt_date("Check-in Date (YYYY-MM-DD)")?;
    let check_out = prompt_date("Check-out Date (YYYY-MM-DD)")?;

    let rooms = manager.availability.search(check_in, check_out).await?;
    if rooms.is_empty() {
        println!("No available rooms for the selected dates.");
        return Ok(());
    }

    println!("\nAvailable Rooms ({}):", rooms.len());
    println!(
        "{:<5} {:<10} {:<15} {:<15} {:<10}",
        "ID", "Room #", "Type", "Price/Night", "Capacity"
    );
    println!("{}", "-".repeat(60));
    for room in rooms {
        println!(
            "{:<5} {:<10} {:<15} ${:<14.2} {:<10}",
            room.room_id, room.room_number, room.room_type, room.price_per_night, room.capacity
        );
    }
    Ok(())
}

async fn make_reservation(manager: &HotelManager) -> anyhow::Result<()> {
    println!("\n--- Make Reservation ---");
    let check_in = prompt_date("Check-in Date (YYYY-MM-DD)")?;
    let check_out = prompt_date("Check-out Date (YYYY-MM-DD)")?;

    let rooms = manager.availability.search(check_in, check_out).await?;
    if rooms.is_empty() {
        println!("No available rooms for the selected dates.");
        return Ok(());
    }

    println!("\nAvailable Rooms:");
    for room in &rooms {
        println!(
            "ID: {} - {} ({}) - ${}/night",
            room.room_id, room.room_number, room.room_type, room.price_per_night
        );
    }

    let room_id: i64 = prompt("\nSelect Room ID")?
        .parse()
        .context("invalid room ID")?;
    let name = prompt("Guest Name")?;
    let phone = prompt("Phone Number")?;
    let email = prompt_optional("Email (optional)")?;
    let address = prompt_optional("Address (optional)")?;

    let created = manager
        .reserve(
            &name,
            &phone,
            room_id,
            check_in,
            check_out,
            email.as_deref(),
            address.as_deref(),
        )
        .await?;

    match created {
        Some(reservation_id) => {
            println!("\nReservation created successfully!");
            println!("Reservation ID: {reservation_id}");
            if let Some(details) = manager.reservations.get(reservation_id).await? {
                println!("Total Amount: ${:.2}", details.total_amount);
            }
        }
        None => println!("Error: Room not available or invalid room ID!"),
    }
    Ok(())
}

async fn view_reservations(manager: &HotelManager) -> anyhow::Result<()> {
    println!("\n--- All Reservations ---");
    let reservations = manager.reservations.list(None).await?;
    if reservations.is_empty() {
        println!("No reservations found.");
        return Ok(());
    }

    println!(
        "{:<5} {:<20} {:<10} {:<12} {:<12} {:<12} {:<15}",
        "ID", "Guest", "Room", "Check-in", "Check-out", "Amount", "Status"
    );
    println!("{}", "-".repeat(100));
    for r in reservations {
        println!(
            "{:<5} {:<20} {:<10} {:<12} {:<12} ${:<11.2} {:<15}",
            r.reservation_id,
            r.guest_name,
            r.room_number,
            r.check_in_date,
            r.check_out_date,
            r.total_amount,
            r.status
        );
    }
    Ok(())
}

async fn check_in_guest(manager: &HotelManager) -> anyhow::Result<()> {
    println!("\n--- Check In Guest ---");
    let reservation_id: i64 = prompt("Reservation ID")?
        .parse()
        .context("invalid reservation ID")?;

    if manager.check_in_guest(reservation_id).await? {
        println!("Guest checked in successfully!");
    } else {
        println!("Error: Reservation not found or already checked in!");
    }
    Ok(())
}

async fn check_out_guest(manager: &HotelManager) -> anyhow::Result<()> {
    println!("\n--- Check Out Guest ---");
    let reservation_id: i64 = prompt("Reservation ID")?
        .parse()
        .context("invalid reservation ID")?;
    let payment_method = prompt("Payment Method (cash/card/online)")?;
    let payment_method = if payment_method.is_empty() {
        "cash".to_string()
    } else {
        payment_method
    };

    if manager.check_out_guest(reservation_id, &payment_method).await? {
        println!("Guest checked out successfully!");
        if let Some(details) = manager.reservations.get(reservation_id).await? {
            println!("Total Paid: ${:.2}", details.total_amount);
        }
    } else {
        println!("Error: Reservation not found or guest not checked in!");
    }
    Ok(())
}

async fn view_guests(manager: &HotelManager) -> anyhow::Result<()> {
    println!("\n--- All Guests ---");
    let guests = manager.guests.list().await?;
    if guests.is_empty() {
        println!("No guests found.");
        return Ok(());
    }

    println!("{:<5} {:<25} {:<15} {:<30}", "ID", "Name", "Phone", "Email");
    println!("{}", "-".repeat(80));
    for guest in guests {
        println!(
            "{:<5} {:<25} {:<15} {:<30}",
            guest.guest_id,
            guest.name,
            guest.phone,
            guest.email.as_deref().unwrap_or("N/A")
        );
    }
    Ok(())
}

async fn room_status_summary(manager: &HotelManager) -> anyhow::Result<()> {
    println!("\n--- Room Status Summary ---");
    let summary = manager.summary().await?;
    println!("Total Rooms: {}", summary.total);
    println!("Available: {}", summary.available);
    println!("Occupied: {}", summary.occupied);
    println!("Maintenance: {}", summary.maintenance);
    Ok(())
}

async fn cancel_reservation(manager: &HotelManager) -> anyhow::Result<()> {
    println!("\n--- Cancel Reservation ---");
    let reservation_id: i64 = prompt("Reservation ID to cancel")?
        .parse()
        .context("invalid reservation ID")?;

    if manager.cancel_reservation(reservation_id).await? {
        println!("Reservation cancelled successfully!");
    } else {
        println!("Error: Reservation not found or cannot be cancelled!");
    }
    Ok(())
}
