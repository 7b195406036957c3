use aphrodite::ephemeris::{EphemerisError, EphemerisProvider, EphemerisSettings, Origin, RawPlacements};
use aphrodite::{classify, BirthChartResult, BirthInput, UnavailableEphemeris, ZodiacSign};
use aphrodite_client::{ClientApproximation, HttpTransport};
use aphrodite_config::{EphemerisConfig, ProviderKind};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use chartd::{build_provider, router, AppState};
use http_body_util::BodyExt;
use std::time::Duration;
use tower::ServiceExt;

/// Date-table sun, fixed moon/ascendant/node.
struct ScriptedProvider;

impl EphemerisProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn compute_positions(
        &self,
        origin: &Origin,
        _settings: &EphemerisSettings,
    ) -> Result<RawPlacements, EphemerisError> {
        let mut raw = RawPlacements::default();
        raw.bodies
            .insert("sun".into(), classify(origin.month, origin.day).name().into());
        raw.bodies.insert("moon".into(), "taurus".into());
        raw.bodies.insert("venus".into(), "Leo".into());
        raw.bodies.insert("north_node".into(), "Cancer".into());
        raw.ascendant = Some("SCORPIO".into());
        Ok(raw)
    }
}

fn scripted_state() -> AppState {
    AppState::new(Box::new(ScriptedProvider))
}

async fn post_json(state: AppState, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/birth-chart")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_birth_chart_full() {
    let (status, json) = post_json(
        scripted_state(),
        r#"{"dateOfBirth":"1995-06-15","timeOfBirth":"14:30","cityOfBirth":"Los Angeles"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sun"], "Gemini");
    assert_eq!(json["moon"], "Taurus");
    assert_eq!(json["rising"], "Scorpio");
    assert_eq!(json["venus"], "Leo");
    assert_eq!(json["northNode"], "Cancer");
    assert_eq!(json["southNode"], "Capricorn");
    assert_eq!(json["coordinates"]["lat"], 34.0522);
    assert_eq!(json["coordinates"]["lng"], -118.2437);
    assert_eq!(json["locationMatched"], true);
    assert_eq!(json["matchedCity"], "Los Angeles");
    assert!(json.get("mars").is_none());
}

#[tokio::test]
async fn test_time_and_city_are_optional() {
    let (status, json) = post_json(scripted_state(), r#"{"dateOfBirth":"2000-02-29"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sun"], "Pisces");
    assert_eq!(json["locationMatched"], false);
    assert_eq!(json["coordinates"]["lat"], 40.7128);
    assert_eq!(json["coordinates"]["lng"], -74.0060);
}

#[tokio::test]
async fn test_missing_date_is_400() {
    let (status, json) = post_json(scripted_state(), r#"{"cityOfBirth":"Paris"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation");
    assert!(!json["details"].as_array().unwrap().is_empty());

    let (status, json) = post_json(scripted_state(), r#"{"dateOfBirth":""}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["details"][0]["field"], "dateOfBirth");
}

#[tokio::test]
async fn test_malformed_date_is_400() {
    for bad in ["06/15/1995", "1995-02-30", "soon"] {
        let body = format!(r#"{{"dateOfBirth":"{}"}}"#, bad);
        let (status, json) = post_json(scripted_state(), &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{bad}");
        assert_eq!(json["details"][0]["field"], "dateOfBirth");
    }
}

#[tokio::test]
async fn test_non_json_body_is_400() {
    let (status, json) = post_json(scripted_state(), "dateOfBirth=1995-06-15").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation");
}

#[tokio::test]
async fn test_provider_failure_still_answers_200() {
    let state = AppState::new(Box::new(UnavailableEphemeris::new("test")));
    let (status, json) = post_json(
        state,
        r#"{"dateOfBirth":"1995-06-15","timeOfBirth":"14:30","cityOfBirth":"Los Angeles"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sun"], "Gemini");
    assert_eq!(json["moon"], "Gemini");
    assert_eq!(json["rising"], "Gemini");
    assert!(json.get("northNode").is_none());
    assert_eq!(json["matchedCity"], "Los Angeles");
}

#[tokio::test]
async fn test_malformed_time_degrades_not_rejects() {
    let (status, json) = post_json(
        scripted_state(),
        r#"{"dateOfBirth":"1995-06-15","timeOfBirth":"2pm","cityOfBirth":"LA"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["moon"], "Gemini");
    assert_eq!(json["matchedCity"], "Los Angeles");
}

#[tokio::test]
async fn test_health_reports_provider() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = router(scripted_state()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["provider"], "scripted");
}

#[tokio::test]
async fn test_disabled_provider_from_config() {
    let provider = build_provider(&EphemerisConfig {
        provider: ProviderKind::None,
        path: None,
    });
    assert_eq!(provider.name(), "unavailable");
}

#[tokio::test]
async fn test_client_against_live_server() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(scripted_state())).await.unwrap();
    });

    let transport =
        HttpTransport::new(format!("http://{}/birth-chart", addr), Duration::from_secs(5)).unwrap();
    let client = ClientApproximation::new(transport);
    let input = BirthInput::new(NaiveDate::from_ymd_opt(1995, 6, 15).unwrap())
        .with_time("14:30")
        .with_city("Los Angeles");

    let chart: BirthChartResult = client.resolve_remote(&input).await;

    assert_eq!(chart.sun, ZodiacSign::Gemini);
    assert_eq!(chart.moon, ZodiacSign::Taurus);
    assert_eq!(chart.south_node, Some(ZodiacSign::Capricorn));
    assert!(!chart.is_sun_sign_only());
}
