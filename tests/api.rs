mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use common::{add_room, setup};
use innkeeper::server::routes;
use innkeeper::HotelManager;

macro_rules! test_app {
    ($manager:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($manager))
                .configure(routes),
        )
        .await
    };
}

#[actix_web::test]
async fn availability_endpoint_requires_both_dates() {
    let (_pool, manager) = setup().await;
    let app = test_app!(manager);

    for uri in [
        "/rooms/available",
        "/rooms/available?check_in=2024-01-10",
        "/rooms/available?check_out=2024-01-15",
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/rooms/available?check_in=yesterday&check_out=2024-01-15")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn availability_endpoint_serializes_the_room_fields() {
    let (_pool, manager) = setup().await;
    add_room(&manager, "101", "Single", 80.0).await;
    let booked = add_room(&manager, "102", "Single", 80.0).await;
    common::reserve(&manager, booked, "555-0100", "2024-01-10", "2024-01-15").await;

    let app = test_app!(manager);
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/rooms/available?check_in=2024-01-12&check_out=2024-01-14")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let rooms = body["rooms"].as_array().unwrap();
    assert_eq!(rooms.len(), 1);

    let room = &rooms[0];
    assert_eq!(room["room_number"], "101");
    assert_eq!(room["room_type"], "Single");
    assert_eq!(room["price_per_night"], 80.0);
    assert_eq!(room["capacity"], 2);
    assert!(room["room_id"].is_i64());
    // Only the advertised fields are exposed.
    assert!(room.get("status").is_none());
}

#[actix_web::test]
async fn room_creation_conflicts_on_duplicate_numbers() {
    let (_pool, manager) = setup().await;
    let app = test_app!(manager);

    let payload = json!({
        "room_number": "101",
        "room_type": "Single",
        "price_per_night": 80.0,
        "capacity": 1,
        "amenities": "WiFi, TV, AC",
    });

    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/rooms").set_json(&payload).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/rooms").set_json(&payload).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let invalid = json!({
        "room_number": "102",
        "room_type": "Single",
        "price_per_night": 80.0,
        "capacity": 0,
    });
    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/rooms").set_json(&invalid).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn unknown_room_is_a_404() {
    let (_pool, manager) = setup().await;
    let app = test_app!(manager);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/rooms/99").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/rooms/99/status")
            .set_json(json!({"status": "maintenance"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn reservation_workflow_over_the_api() {
    let (pool, manager) = setup().await;
    let room_id = add_room(&manager, "201", "Double", 120.0).await;
    let app = test_app!(manager);
    let manager = HotelManager::new(pool);

    // Reserve.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/reservations")
            .set_json(json!({
                "guest_name": "Alice Smith",
                "phone": "555-0100",
                "room_id": room_id,
                "check_in": "2024-06-01",
                "check_out": "2024-06-04",
                "email": "alice@example.com",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "confirmed");
    assert_eq!(body["total_amount"], 360.0);
    let reservation_id = body["reservation_id"].as_i64().unwrap();

    // The same room for an overlapping range conflicts.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/reservations")
            .set_json(json!({
                "guest_name": "Bob",
                "phone": "555-0101",
                "room_id": room_id,
                "check_in": "2024-06-03",
                "check_out": "2024-06-05",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Inverted or empty date ranges are invalid input.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/reservations")
            .set_json(json!({
                "guest_name": "Bob",
                "phone": "555-0101",
                "room_id": room_id,
                "check_in": "2024-06-10",
                "check_out": "2024-06-10",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Check in, then check out paying by card.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/reservations/{reservation_id}/checkin"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // A second check-in is a guard failure.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/reservations/{reservation_id}/checkin"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/reservations/{reservation_id}/checkout"))
            .set_json(json!({"payment_method": "card"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["amount_paid"], 360.0);
    assert_eq!(body["payment_method"], "card");

    // Ledger shows the single completed payment.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/reservations/{reservation_id}/payments"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let payments: Value = test::read_body_json(resp).await;
    let payments = payments.as_array().unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0]["amount"], 360.0);
    assert_eq!(payments[0]["payment_status"], "completed");

    // Terminal reservations cannot be cancelled.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/reservations/{reservation_id}/cancel"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let details = manager.reservations.get(reservation_id).await.unwrap().unwrap();
    assert_eq!(details.status.as_str(), "checked_out");
}

#[actix_web::test]
async fn dashboard_reports_stats_and_recent_reservations() {
    let (_pool, manager) = setup().await;
    innkeeper::seed::run(&manager).await.unwrap();
    let room_id = manager.rooms.list().await.unwrap()[0].room_id;
    common::reserve(&manager, room_id, "555-0100", "2024-06-01", "2024-06-04").await;
    let app = test_app!(manager);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["stats"]["total_rooms"], 7);
    assert_eq!(body["stats"]["available_rooms"], 7);
    assert_eq!(body["stats"]["total_revenue"], 0.0);
    assert_eq!(body["stats"]["active_reservations"], 1);
    assert_eq!(body["recent_reservations"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn reservation_list_supports_status_filters() {
    let (_pool, manager) = setup().await;
    let room_id = add_room(&manager, "101", "Single", 80.0).await;
    let reservation_id =
        common::reserve(&manager, room_id, "555-0100", "2024-06-01", "2024-06-04").await;
    manager.check_in_guest(reservation_id).await.unwrap();
    let app = test_app!(manager);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/reservations?status=checked_in")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/reservations?status=cancelled")
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert!(body.as_array().unwrap().is_empty());

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/reservations/99").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
