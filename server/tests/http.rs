use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use system::serde_json::{self, json};
use whiteboard_server::config::HeartbeatConfig;
use whiteboard_server::handlers::root;
use whiteboard_server::server::spawn_server;

fn heartbeat() -> HeartbeatConfig {
    HeartbeatConfig {
        interval: Duration::from_secs(5),
        client_timeout: Duration::from_secs(10),
    }
}

#[actix_rt::test]
async fn it_should_report_empty_session_status() {
    let srv_tx = spawn_server();
    let mut app = test::init_service(
        App::new()
            .data(srv_tx)
            .data(heartbeat())
            .configure(root),
    )
    .await;

    let req = test::TestRequest::get().uri("/status").to_request();
    let body: serde_json::Value = test::read_response_json(&mut app, req).await;

    assert_eq!(
        body,
        json!({"participants": 0, "drawing": 0, "history": 0, "redo": 0})
    );
}

#[actix_rt::test]
async fn it_should_refuse_plain_http_on_websocket_route() {
    let srv_tx = spawn_server();
    let mut app = test::init_service(
        App::new()
            .data(srv_tx)
            .data(heartbeat())
            .configure(root),
    )
    .await;

    let req = test::TestRequest::get().uri("/ws").to_request();
    let resp = test::call_service(&mut app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
