use actix_web::{web, HttpResponse};

use crate::error::Error;
use crate::manager::HotelManager;

pub async fn list_guests(manager: web::Data<HotelManager>) -> Result<HttpResponse, Error> {
    let guests = manager.guests.list().await?;
    Ok(HttpResponse::Ok().json(guests))
}
