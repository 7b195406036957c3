use aphrodite::{BirthChartRequest, BirthChartResult, BirthInput, ZodiacSign};
use aphrodite_client::{ChartTransport, ClientApproximation, ClientError, HttpTransport};
use async_trait::async_trait;
use axum::{http::StatusCode, routing::post, Json, Router};
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn input() -> BirthInput {
    BirthInput::new(NaiveDate::from_ymd_opt(1995, 6, 15).unwrap())
        .with_time("14:30")
        .with_city("Los Angeles")
}

fn full_chart() -> BirthChartResult {
    serde_json::from_value(serde_json::json!({
        "sun": "Gemini",
        "moon": "Scorpio",
        "rising": "Aquarius",
        "mercury": "Cancer",
        "northNode": "Libra",
        "southNode": "Aries",
        "coordinates": { "lat": 34.0522, "lng": -118.2437 },
        "locationMatched": true,
        "matchedCity": "Los Angeles"
    }))
    .unwrap()
}

struct StaticTransport {
    calls: AtomicUsize,
}

#[async_trait]
impl ChartTransport for StaticTransport {
    async fn fetch_chart(&self, request: &BirthChartRequest) -> Result<BirthChartResult, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(request.date_of_birth, "1995-06-15");
        assert_eq!(request.time_of_birth.as_deref(), Some("14:30"));
        Ok(full_chart())
    }
}

struct DownTransport;

#[async_trait]
impl ChartTransport for DownTransport {
    async fn fetch_chart(&self, _request: &BirthChartRequest) -> Result<BirthChartResult, ClientError> {
        Err(ClientError::Status {
            endpoint: "http://test/birth-chart".into(),
            status: 503,
            body: "maintenance".into(),
        })
    }
}

/// Serve `router` on an ephemeral port and return its birth-chart URL.
async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/birth-chart", addr)
}

#[tokio::test]
async fn test_remote_chart_is_passed_through() {
    let client = ClientApproximation::new(StaticTransport {
        calls: AtomicUsize::new(0),
    });
    let chart = client.resolve_remote(&input()).await;
    assert_eq!(chart, full_chart());
}

#[tokio::test]
async fn test_failed_transport_approximates_locally() {
    let client = ClientApproximation::new(DownTransport);
    let chart = client.resolve_remote(&input()).await;

    assert_eq!(chart.sun, ZodiacSign::Gemini);
    assert_eq!(chart.moon, ZodiacSign::Gemini);
    assert_eq!(chart.rising, ZodiacSign::Gemini);
    assert!(chart.mercury.is_none());
    assert_eq!((chart.coordinates.lat, chart.coordinates.lng), (34.0522, -118.2437));
}

#[tokio::test]
async fn test_http_success() {
    let hits = Arc::new(AtomicUsize::new(0));
    let seen = hits.clone();
    let router = Router::new().route(
        "/birth-chart",
        post(move |Json(req): Json<BirthChartRequest>| {
            let seen = seen.clone();
            async move {
                seen.fetch_add(1, Ordering::SeqCst);
                assert_eq!(req.city_of_birth, "Los Angeles");
                Json(full_chart())
            }
        }),
    );
    let endpoint = spawn_server(router).await;

    let transport = HttpTransport::new(endpoint, Duration::from_secs(5)).unwrap();
    let chart = ClientApproximation::new(transport).resolve_remote(&input()).await;

    assert_eq!(chart, full_chart());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_http_error_status_falls_back() {
    let router = Router::new().route(
        "/birth-chart",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let endpoint = spawn_server(router).await;

    let transport = HttpTransport::new(endpoint, Duration::from_secs(5)).unwrap();
    let err = transport
        .fetch_chart(&input().to_request())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 500, .. }));

    let chart = ClientApproximation::new(transport).resolve_remote(&input()).await;
    assert!(chart.is_sun_sign_only());
}

#[tokio::test]
async fn test_http_garbage_body_falls_back() {
    let router = Router::new().route("/birth-chart", post(|| async { "not json" }));
    let endpoint = spawn_server(router).await;

    let transport = HttpTransport::new(endpoint, Duration::from_secs(5)).unwrap();
    let err = transport
        .fetch_chart(&input().to_request())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_server_falls_back() {
    // Grab a free port, then close it so nothing is listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport =
        HttpTransport::new(format!("http://{}/birth-chart", addr), Duration::from_secs(2)).unwrap();
    let chart = ClientApproximation::new(transport).resolve_remote(&input()).await;

    assert!(chart.is_sun_sign_only());
    assert_eq!(chart.sun, ZodiacSign::Gemini);
    assert!(chart.location_matched);
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let router = Router::new().route(
        "/birth-chart",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(full_chart())
        }),
    );
    let endpoint = spawn_server(router).await;

    let transport = HttpTransport::new(endpoint, Duration::from_millis(200)).unwrap();
    let chart = ClientApproximation::new(transport).resolve_remote(&input()).await;
    assert!(chart.is_sun_sign_only());
}

#[tokio::test]
async fn test_from_settings() {
    let settings = aphrodite_config::Settings::default();
    let client = ClientApproximation::from_settings(&settings.client);
    assert!(client.is_ok());
}
