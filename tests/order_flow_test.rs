use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use canteen_backend::app::app::App;
use serde_json::json;
use tower::ServiceExt; // for .oneshot()

async fn app_router() -> Router {
    App::new().await.router()
}

async fn login(router: &Router, username: &str, password: &str) -> String {
    let resp = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(format!("username={username}&password={password}")))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    resp.headers()
        .get(header::SET_COOKIE)
        .expect("session cookie missing")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

fn json_req(uri: &str, cookie: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_req(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[tokio::test]
async fn placed_order_ignores_the_selection_and_records_the_placeholder() {
    let app = app_router().await;
    let cookie = login(&app, "admin", "admin123").await;

    let resp = app
        .clone()
        .oneshot(json_req("/order", Some(&cookie), json!({"items": {"1": 2}})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["orderId"], 1);

    // The recorded order is the fixed placeholder line, not the selection.
    let resp = app.oneshot(get_req("/my-orders", &cookie)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Test Item x1"));
    assert!(body.contains("₹100"));
    assert!(!body.contains("Chicken Biryani"));
}

#[tokio::test]
async fn anonymous_order_placement_answers_success_false() {
    let app = app_router().await;
    let resp = app
        .oneshot(json_req("/order", None, json!({"items": {"1": 1}})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn order_ids_increase_across_sequential_placements() {
    let app = app_router().await;
    let cookie = login(&app, "student", "password").await;
    let mut last = 0;
    for _ in 0..3 {
        let resp = app
            .clone()
            .oneshot(json_req("/order", Some(&cookie), json!({"items": {}})))
            .await
            .unwrap();
        let json = body_json(resp).await;
        assert_eq!(json["success"], true);
        let id = json["orderId"].as_u64().unwrap();
        assert!(id > last);
        last = id;
    }
}

#[tokio::test]
async fn admin_status_update_is_visible_to_the_orders_owner() {
    let app = app_router().await;

    let student_cookie = login(&app, "student", "password").await;
    let resp = app
        .clone()
        .oneshot(json_req("/order", Some(&student_cookie), json!({"items": {"2": 1}})))
        .await
        .unwrap();
    let order_id = body_json(resp).await["orderId"].as_u64().unwrap();

    let admin_cookie = login(&app, "admin", "admin123").await;
    let resp = app
        .clone()
        .oneshot(json_req(
            "/admin/update-status",
            Some(&admin_cookie),
            json!({"orderId": order_id, "status": "ready"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["success"], true);

    let resp = app.oneshot(get_req("/my-orders", &student_cookie)).await.unwrap();
    let body = body_string(resp).await;
    assert!(body.contains("ready"));
    assert!(!body.contains("pending"));
}

#[tokio::test]
async fn status_update_for_unknown_order_still_reports_success() {
    // The unknown id is silently ignored and the response is success
    // regardless; clients rely on this.
    let app = app_router().await;
    let cookie = login(&app, "admin", "admin123").await;

    let resp = app
        .clone()
        .oneshot(json_req(
            "/admin/update-status",
            Some(&cookie),
            json!({"orderId": 999, "status": "ready"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["success"], true);

    // Ledger unchanged: the dashboard lists no orders.
    let resp = app.oneshot(get_req("/admin", &cookie)).await.unwrap();
    let body = body_string(resp).await;
    assert!(!body.contains("data-order-id"));
}

#[tokio::test]
async fn status_update_without_a_session_answers_success_false() {
    let app = app_router().await;
    let resp = app
        .oneshot(json_req(
            "/admin/update-status",
            None,
            json!({"orderId": 1, "status": "ready"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["success"], false);
}

#[tokio::test]
async fn my_orders_only_lists_the_sessions_own_orders() {
    let app = app_router().await;

    let student_cookie = login(&app, "student", "password").await;
    let admin_cookie = login(&app, "admin", "admin123").await;

    app.clone()
        .oneshot(json_req("/order", Some(&student_cookie), json!({"items": {}})))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_req("/order", Some(&admin_cookie), json!({"items": {}})))
        .await
        .unwrap();

    let resp = app.clone().oneshot(get_req("/my-orders", &student_cookie)).await.unwrap();
    let body = body_string(resp).await;
    assert!(body.contains("data-order-id=\"1\""));
    assert!(!body.contains("data-order-id=\"2\""));

    // The admin dashboard sees both.
    let resp = app.oneshot(get_req("/admin", &admin_cookie)).await.unwrap();
    let body = body_string(resp).await;
    assert!(body.contains("data-order-id=\"1\""));
    assert!(body.contains("data-order-id=\"2\""));
}
