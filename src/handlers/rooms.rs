use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ErrorResponse;
use crate::error::Error;
use crate::manager::HotelManager;
use crate::models::room::{CreateRoom, RoomStatus};

#[derive(Debug, Deserialize)]
pub struct RoomFilter {
    pub status: Option<RoomStatus>,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AvailableRoom {
    pub room_id: i64,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub capacity: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatus {
    pub status: RoomStatus,
}

fn parse_date(s: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| Error::invalid_input(format!("invalid date (expected YYYY-MM-DD): {s}")))
}

pub async fn list_rooms(
    manager: web::Data<HotelManager>,
    params: web::Query<RoomFilter>,
) -> Result<HttpResponse, Error> {
    let rooms = match params.status {
        Some(status) => manager.rooms.list_by_status(status).await?,
        None => manager.rooms.list().await?,
    };
    Ok(HttpResponse::Ok().json(rooms))
}

pub async fn create_room(
    manager: web::Data<HotelManager>,
    body: web::Json<CreateRoom>,
) -> Result<HttpResponse, Error> {
    if let Err(e) = body.validate() {
        return Ok(HttpResponse::BadRequest().json(e));
    }

    let status = body.status.unwrap_or(RoomStatus::Available);
    let room_id = manager
        .rooms
        .add(
            &body.room_number,
            &body.room_type,
            body.price_per_night,
            body.capacity,
            body.amenities.as_deref(),
            status,
        )
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "room_id": room_id,
        "room_number": &body.room_number,
        "status": status,
    })))
}

pub async fn get_room(
    manager: web::Data<HotelManager>,
    path: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let room_id = path.into_inner();
    match manager.rooms.get(room_id).await? {
        Some(room) => Ok(HttpResponse::Ok().json(room)),
        None => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Room not found"))),
    }
}

pub async fn update_room_status(
    manager: web::Data<HotelManager>,
    path: web::Path<i64>,
    body: web::Json<UpdateStatus>,
) -> Result<HttpResponse, Error> {
    let room_id = path.into_inner();
    manager.rooms.set_status(room_id, body.status).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "room_id": room_id,
        "status": body.status,
    })))
}

pub async fn available_rooms(
    manager: web::Data<HotelManager>,
    params: web::Query<AvailabilityQuery>,
) -> Result<HttpResponse, Error> {
    let (Some(check_in), Some(check_out)) = (params.check_in.as_deref(), params.check_out.as_deref())
    else {
        return Ok(HttpResponse::BadRequest()
            .json(ErrorResponse::new("Missing check_in or check_out parameters")));
    };

    let check_in = parse_date(check_in)?;
    let check_out = parse_date(check_out)?;

    let rooms: Vec<AvailableRoom> = manager
        .availability
        .search(check_in, check_out)
        .await?
        .into_iter()
        .map(|room| AvailableRoom {
            room_id: room.room_id,
            room_number: room.room_number,
            room_type: room.room_type,
            price_per_night: room.price_per_night,
            capacity: room.capacity,
        })
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({ "rooms": rooms })))
}
