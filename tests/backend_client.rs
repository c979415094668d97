//! Requests sent to a local one-shot HTTP server

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use kartingrm::calendar::{LoadState, RackView};
use kartingrm::client::HttpClient;
use kartingrm::config::BackendConfig;
use kartingrm::mock_behaviour::RecordingInterface;
use kartingrm::reservation::ReservationService;
use kartingrm::traits::ReservationSource;

/// Serve a single response, and return the raw request that was received
async fn serve_once(status: &'static str, body: &'static str) -> (BackendConfig, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while request.windows(4).any(|w| w == b"\r\n\r\n") == false {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 { break; }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status, body.len(), body);
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&request).to_string()
    });

    (BackendConfig::new("127.0.0.1", port), handle)
}

#[tokio::test]
async fn sends_json_requests_and_decodes_the_body() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (config, server) = serve_once("200 OK", r#"{"status": "ok", "count": 2}"#).await;
    let client = HttpClient::new(&config).unwrap();

    let value: serde_json::Value = client.get_json("reservation/rack").await.unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["count"], 2);

    let request = server.await.unwrap().to_lowercase();
    assert!(request.starts_with("get /api/reservation/rack http/1.1\r\n"), "{}", request);
    assert!(request.contains("content-type: application/json\r\n"), "{}", request);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (config, server) = serve_once("500 Internal Server Error", r#"{"error": "boom"}"#).await;
    let client = HttpClient::new(&config).unwrap();

    let res: Result<serde_json::Value, _> = client.get_json("reservation/rack").await;
    let err = res.unwrap_err();
    assert!(err.to_string().contains("500"), "{}", err);
    server.await.unwrap();
}

#[tokio::test]
async fn invalid_record_does_not_hide_the_others() {
    let _ = env_logger::builder().is_test(true).try_init();

    let body = r#"[
        {"title": "Ana", "start": "2024-05-01T10:00", "end": "2024-05-01T10:30"},
        {"title": null, "start": "2024-05-01T11:00", "end": "2024-05-01T11:30"}
    ]"#;
    let (config, server) = serve_once("200 OK", body).await;
    let service = ReservationService::new(HttpClient::new(&config).unwrap());
    let ui = RecordingInterface::new();
    let mut rack = RackView::new();

    rack.load_week(&service, &ui).await;
    server.await.unwrap();

    assert_eq!(rack.state(), LoadState::Loaded);
    assert_eq!(rack.events().len(), 1);
    assert_eq!(rack.events()[0].title(), "Ana");
    assert!(ui.alerts().is_empty());
}

#[tokio::test]
async fn body_that_is_not_a_list_is_an_error() {
    let (config, server) = serve_once("200 OK", r#"{"title": "Ana"}"#).await;
    let service = ReservationService::new(HttpClient::new(&config).unwrap());

    assert!(service.get_rack_reservations().await.is_err());
    server.await.unwrap();
}
