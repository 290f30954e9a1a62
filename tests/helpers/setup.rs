use actix_web::{web, App, HttpResponse, HttpServer};
use agencia_notify::infra::{Config, NotifyContext};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

pub type RecordedPayloads = Arc<Mutex<Vec<serde_json::Value>>>;

async fn record_notification(
    payload: web::Json<serde_json::Value>,
    recorded: web::Data<RecordedPayloads>,
) -> HttpResponse {
    recorded.lock().unwrap().push(payload.into_inner());
    HttpResponse::Ok().json(serde_json::json!({ "message": "queued" }))
}

async fn reject_notification(_payload: web::Json<serde_json::Value>) -> HttpResponse {
    HttpResponse::InternalServerError()
        .json(serde_json::json!({ "message": "smtp unavailable" }))
}

// Launch a stub notification endpoint as a background task and return
// its URL together with the payloads it has recorded.
pub fn spawn_notify_endpoint() -> (String, RecordedPayloads) {
    let recorded: RecordedPayloads = Arc::new(Mutex::new(Vec::new()));
    let data = web::Data::new(recorded.clone());

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().expect("Bound address").port();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/api/notifications", web::post().to(record_notification))
    })
    .listen(listener)
    .expect("Failed to listen on stub endpoint")
    .workers(1)
    .run();
    let _ = actix_web::rt::spawn(server);

    (
        format!("http://127.0.0.1:{}/api/notifications", port),
        recorded,
    )
}

// Launch a stub endpoint that rejects every payload with a 500.
pub fn spawn_failing_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().expect("Bound address").port();

    let server = HttpServer::new(|| {
        App::new().route("/api/notifications", web::post().to(reject_notification))
    })
    .listen(listener)
    .expect("Failed to listen on stub endpoint")
    .workers(1)
    .run();
    let _ = actix_web::rt::spawn(server);

    format!("http://127.0.0.1:{}/api/notifications", port)
}

pub fn test_context(endpoint_url: String) -> NotifyContext {
    let config = Config {
        notify_endpoint_url: endpoint_url,
        notify_api_key: "sk_test".into(),
        sender_email: "notificaciones@agencia.mx".into(),
        request_timeout_millis: 2000,
    };
    NotifyContext::create(config)
}
