use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use super::ErrorResponse;
use crate::error::Error;
use crate::manager::HotelManager;
use crate::models::reservation::{CreateReservation, ReservationStatus};

#[derive(Debug, Deserialize)]
pub struct ReservationFilter {
    pub status: Option<ReservationStatus>,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
}

fn default_payment_method() -> String {
    "cash".to_string()
}

pub async fn list_reservations(
    manager: web::Data<HotelManager>,
    params: web::Query<ReservationFilter>,
) -> Result<HttpResponse, Error> {
    let reservations = manager.reservations.list(params.status).await?;
    Ok(HttpResponse::Ok().json(reservations))
}

pub async fn create_reservation(
    manager: web::Data<HotelManager>,
    body: web::Json<CreateReservation>,
) -> Result<HttpResponse, Error> {
    if let Err(e) = body.validate() {
        return Ok(HttpResponse::BadRequest().json(e));
    }

    let created = manager
        .reserve(
            &body.guest_name,
            &body.phone,
            body.room_id,
            body.check_in,
            body.check_out,
            body.email.as_deref(),
            body.address.as_deref(),
        )
        .await?;

    match created {
        Some(reservation_id) => {
            let total_amount = manager
                .reservations
                .get(reservation_id)
                .await?
                .map(|d| d.total_amount);
            Ok(HttpResponse::Created().json(serde_json::json!({
                "reservation_id": reservation_id,
                "status": "confirmed",
                "total_amount": total_amount,
            })))
        }
        None => Ok(HttpResponse::Conflict()
            .json(ErrorResponse::new("Room not available for the selected dates"))),
    }
}

pub async fn get_reservation(
    manager: web::Data<HotelManager>,
    path: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let reservation_id = path.into_inner();
    match manager.reservations.get(reservation_id).await? {
        Some(details) => Ok(HttpResponse::Ok().json(details)),
        None => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Reservation not found"))),
    }
}

pub async fn check_in(
    manager: web::Data<HotelManager>,
    path: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let reservation_id = path.into_inner();
    if manager.check_in_guest(reservation_id).await? {
        Ok(HttpResponse::Ok().json(serde_json::json!({
            "reservation_id": reservation_id,
            "status": "checked_in",
        })))
    } else {
        Ok(HttpResponse::BadRequest()
            .json(ErrorResponse::new("Reservation not found or not confirmed")))
    }
}

pub async fn check_out(
    manager: web::Data<HotelManager>,
    path: web::Path<i64>,
    body: Option<web::Json<CheckoutRequest>>,
) -> Result<HttpResponse, Error> {
    let reservation_id = path.into_inner();
    let payment_method = body
        .map(|b| b.into_inner().payment_method)
        .unwrap_or_else(default_payment_method);

    let details = manager.reservations.get(reservation_id).await?;
    if manager.check_out_guest(reservation_id, &payment_method).await? {
        Ok(HttpResponse::Ok().json(serde_json::json!({
            "reservation_id": reservation_id,
            "status": "checked_out",
            "amount_paid": details.map(|d| d.total_amount),
            "payment_method": payment_method,
        })))
    } else {
        Ok(HttpResponse::BadRequest()
            .json(ErrorResponse::new("Reservation not found or guest not checked in")))
    }
}

pub async fn cancel(
    manager: web::Data<HotelManager>,
    path: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let reservation_id = path.into_inner();
    if manager.cancel_reservation(reservation_id).await? {
        Ok(HttpResponse::Ok().json(serde_json::json!({
            "reservation_id": reservation_id,
            "status": "cancelled",
        })))
    } else {
        Ok(HttpResponse::BadRequest()
            .json(ErrorResponse::new("Reservation not found or cannot be cancelled")))
    }
}

pub async fn list_payments(
    manager: web::Data<HotelManager>,
    path: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    let reservation_id = path.into_inner();
    let payments = manager.payments.for_reservation(reservation_id).await?;
    Ok(HttpResponse::Ok().json(payments))
}
