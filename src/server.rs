use actix_web::{middleware, web, App, HttpServer};
use sqlx::SqlitePool;

use crate::handlers;
use crate::manager::HotelManager;

/// Route table, shared between the server and handler tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::dashboard::index))
        .service(
            web::scope("/rooms")
                .route("", web::get().to(handlers::rooms::list_rooms))
                .route("", web::post().to(handlers::rooms::create_room))
                .route("/available", web::get().to(handlers::rooms::available_rooms))
                .route("/{id}", web::get().to(handlers::rooms::get_room))
                .route("/{id}/status", web::post().to(handlers::rooms::update_room_status)),
        )
        .service(web::scope("/guests").route("", web::get().to(handlers::guests::list_guests)))
        .service(
            web::scope("/reservations")
                .route("", web::get().to(handlers::reservations::list_reservations))
                .route("", web::post().to(handlers::reservations::create_reservation))
                .route("/{id}", web::get().to(handlers::reservations::get_reservation))
                .route("/{id}/checkin", web::post().to(handlers::reservations::check_in))
                .route("/{id}/checkout", web::post().to(handlers::reservations::check_out))
                .route("/{id}/cancel", web::post().to(handlers::reservations::cancel))
                .route("/{id}/payments", web::get().to(handlers::reservations::list_payments)),
        );
}

pub async fn run(pool: SqlitePool, bind: &str) -> std::io::Result<()> {
    let manager = web::Data::new(HotelManager::new(pool));

    log::info!("Starting server at http://{bind}");
    HttpServer::new(move || {
        App::new()
            .app_data(manager.clone())
            .wrap(middleware::Logger::default())
            .configure(routes)
    })
    .bind(bind)?
    .run()
    .await
}
