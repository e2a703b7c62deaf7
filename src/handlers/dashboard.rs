use actix_web::{web, HttpResponse};

use crate::error::Error;
use crate::manager::HotelManager;

pub async fn index(manager: web::Data<HotelManager>) -> Result<HttpResponse, Error> {
    let dashboard = manager.dashboard().await?;
    Ok(HttpResponse::Ok().json(dashboard))
}
