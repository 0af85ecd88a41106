//! End-to-end fetcher tests against a mocked archive API.

use fetcher::{process_data, ArchiveClient, City, DailyObservation};
use slog::{o, Discard, Logger};
use std::{fs, path::Path};
use time::macros::date;
use wiremock::{
    matchers::{method, path as url_path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn test_logger() -> Logger {
    Logger::root(Discard, o!())
}

fn city(name: &'static str, latitude: f64, longitude: f64) -> City {
    City {
        name,
        latitude,
        longitude,
    }
}

fn archive_body(times: &[String], temps: &[Option<f64>]) -> serde_json::Value {
    serde_json::json!({
        "latitude": 0.0,
        "longitude": 0.0,
        "timezone": "GMT",
        "daily_units": { "time": "iso8601", "temperature_2m_mean": "°C" },
        "daily": { "time": times, "temperature_2m_mean": temps }
    })
}

/// Every day of 2023, as the archive returns them.
fn full_year() -> Vec<String> {
    let mut days = vec![];
    let mut current = date!(2023 - 01 - 01);
    while current <= date!(2023 - 12 - 31) {
        days.push(current.to_string());
        current = current.next_day().unwrap();
    }
    days
}

async fn mount_city_mock(
    server: &MockServer,
    latitude: &str,
    response: ResponseTemplate,
) {
    Mock::given(method("GET"))
        .and(url_path("/v1/archive"))
        .and(query_param("latitude", latitude))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn full_year_fetch_returns_365_rows_tagged_with_city() {
    let server = MockServer::start().await;
    let times = full_year();
    let temps: Vec<Option<f64>> = (0..times.len()).map(|i| Some(i as f64 / 10.0)).collect();
    mount_city_mock(
        &server,
        "48.8566",
        ResponseTemplate::new(200).set_body_json(archive_body(&times, &temps)),
    )
    .await;

    let client = ArchiveClient::new(test_logger(), server.uri());
    let batch = client
        .fetch_daily_mean(&city("Paris", 48.8566, 2.3522))
        .await
        .unwrap()
        .expect("expected a batch for a 200 response");

    assert_eq!(batch.daily.time.len(), 365);
    assert_eq!(batch.city, "Paris");
}

#[tokio::test]
async fn testville_example_produces_exactly_two_rows() {
    let server = MockServer::start().await;
    mount_city_mock(
        &server,
        "0",
        ResponseTemplate::new(200).set_body_json(archive_body(
            &["2023-01-01".to_string(), "2023-01-02".to_string()],
            &[Some(10.5), Some(11.2)],
        )),
    )
    .await;

    let client = ArchiveClient::new(test_logger(), server.uri());
    let batches = client
        .fetch_all(&[city("Testville", 0.0, 0.0)])
        .await
        .unwrap();
    let combined = fetcher::combine(batches).unwrap();

    assert_eq!(
        combined,
        vec![
            DailyObservation {
                date: date!(2023 - 01 - 01),
                temp_mean: Some(10.5),
                city: "Testville".to_string(),
            },
            DailyObservation {
                date: date!(2023 - 01 - 02),
                temp_mean: Some(11.2),
                city: "Testville".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn non_200_yields_no_batch_and_run_continues() {
    let server = MockServer::start().await;
    mount_city_mock(
        &server,
        "10.5",
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;
    mount_city_mock(
        &server,
        "20.5",
        ResponseTemplate::new(200).set_body_json(archive_body(
            &["2023-01-01".to_string()],
            &[Some(3.0)],
        )),
    )
    .await;

    let client = ArchiveClient::new(test_logger(), server.uri());
    let batches = client
        .fetch_all(&[city("Broken", 10.5, 0.0), city("Working", 20.5, 0.0)])
        .await
        .unwrap();

    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].city, "Working");
}

#[tokio::test]
async fn concatenation_preserves_city_iteration_order() {
    let server = MockServer::start().await;
    mount_city_mock(
        &server,
        "10.5",
        ResponseTemplate::new(200).set_body_json(archive_body(
            &["2023-01-01".to_string(), "2023-01-02".to_string()],
            &[Some(1.0), Some(2.0)],
        )),
    )
    .await;
    mount_city_mock(
        &server,
        "20.5",
        ResponseTemplate::new(200).set_body_json(archive_body(
            &["2023-01-01".to_string()],
            &[Some(3.0)],
        )),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().to_string_lossy().to_string();
    let client = ArchiveClient::new(test_logger(), server.uri());
    let cities = [city("First", 10.5, 0.0), city("Second", 20.5, 0.0)];

    let saved = process_data(&test_logger(), &client, &cities, &data_dir)
        .await
        .unwrap()
        .expect("expected a saved file");

    let content = fs::read_to_string(saved).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "date,temp_mean,city");
    assert_eq!(lines[1], "2023-01-01,1.0,First");
    assert_eq!(lines[2], "2023-01-02,2.0,First");
    assert_eq!(lines[3], "2023-01-01,3.0,Second");
    assert_eq!(lines.len(), 4);
}

#[tokio::test]
async fn total_failure_writes_no_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(url_path("/v1/archive"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().to_string_lossy().to_string();
    let client = ArchiveClient::new(test_logger(), server.uri());
    let cities = [city("First", 10.5, 0.0), city("Second", 20.5, 0.0)];

    let saved = process_data(&test_logger(), &client, &cities, &data_dir)
        .await
        .unwrap();

    assert!(saved.is_none());
    assert!(!dir.path().join("raw/temperatures_2023.csv").exists());
}

#[tokio::test]
async fn rerun_overwrites_previous_dataset() {
    let server = MockServer::start().await;
    mount_city_mock(
        &server,
        "10.5",
        ResponseTemplate::new(200).set_body_json(archive_body(
            &["2023-01-01".to_string()],
            &[Some(1.5)],
        )),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().to_string_lossy().to_string();
    let file_path = dir.path().join("raw/temperatures_2023.csv");
    fs::create_dir_all(dir.path().join("raw")).unwrap();
    fs::write(&file_path, "stale content from a previous run\n").unwrap();

    let client = ArchiveClient::new(test_logger(), server.uri());
    let cities = [city("Only", 10.5, 0.0)];
    process_data(&test_logger(), &client, &cities, &data_dir)
        .await
        .unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, "date,temp_mean,city\n2023-01-01,1.5,Only\n");
    assert!(Path::new(&file_path).exists());
}

#[tokio::test]
async fn malformed_body_is_a_hard_error() {
    let server = MockServer::start().await;
    mount_city_mock(
        &server,
        "10.5",
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = ArchiveClient::new(test_logger(), server.uri());
    let result = client.fetch_daily_mean(&city("Garbled", 10.5, 0.0)).await;

    assert!(result.is_err());
}
