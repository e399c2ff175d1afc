//! Integration tests for the TfL client (wiremock-based)

use domain::{NaptanId, Prediction, PredictionQuery, QueryValue, StopPoint, StopQuery};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_tfl::{StopPointClient, TflClient, TflConfig, TflError, UpstreamClient};

fn client_for_mock(server: &MockServer) -> TflClient {
    TflClient::new(&TflConfig::for_testing(server.uri())).unwrap()
}

fn stop_query() -> StopQuery {
    StopQuery {
        latitude: QueryValue::from("51.492628"),
        longitude: QueryValue::from("-0.223060"),
        radius: QueryValue::from(200),
        stop_types: QueryValue::from("NaptanPublicBusCoachTram"),
        return_lines: QueryValue::from(false),
    }
}

fn prediction_query() -> PredictionQuery {
    PredictionQuery::new(NaptanId::new("490004290L").unwrap())
}

const fn sample_stop_points_json() -> &'static str {
    r#"{
        "$type": "Tfl.Api.Presentation.Entities.StopPointsResponse, Tfl.Api.Presentation.Entities",
        "centrePoint": [51.493, -0.223],
        "stopPoints": [
            {
                "naptanId": "490008688P",
                "distance": 32.65928570759986,
                "indicator": "Stop H",
                "stopLetter": "H",
                "icsCode": "1008688",
                "stopType": "NaptanPublicBusCoachTram",
                "stationNaptan": "490G000617",
                "lat": 51.488231,
                "lon": -0.287386
            }
        ],
        "pageSize": 0,
        "total": 1,
        "page": 0
    }"#
}

const fn sample_arrivals_json() -> &'static str {
    r#"[
        {
            "vehicleId": "LK10BXV",
            "naptanId": "490004290L",
            "stationName": "Brentford Fountain Leisure Centre",
            "lineId": "237",
            "lineName": "237",
            "platformName": "K",
            "timeToStation": 794
        }
    ]"#
}

#[tokio::test]
async fn test_search_stops_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/StopPoint"))
        .and(query_param("lat", "51.492628"))
        .and(query_param("lon", "-0.223060"))
        .and(query_param("radius", "200"))
        .and(query_param("stopTypes", "NaptanPublicBusCoachTram"))
        .and(query_param("returnLines", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_stop_points_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let response = client.search_stops(&stop_query()).await.unwrap();

    assert_eq!(
        response.stop_points,
        vec![StopPoint::new("H", "490008688P", 32.659_285_707_599_86)]
    );
}

#[tokio::test]
async fn test_search_stops_drops_incomplete_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/StopPoint"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "stopPoints": [
                { "stopLetter": "A", "naptanId": "490000001A", "distance": 12.5 },
                { "naptanId": "490000002B", "distance": 40.1 },
                { "stopLetter": "C", "naptanId": "490000003C", "distance": 80.0 }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let response = client.search_stops(&stop_query()).await.unwrap();

    let ids: Vec<&str> = response
        .stop_points
        .iter()
        .map(|s| s.naptan_id.as_str())
        .collect();
    assert_eq!(ids, vec!["490000001A", "490000003C"]);
}

#[tokio::test]
async fn test_search_stops_empty_result_is_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/StopPoint"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"stopPoints": []}"#))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let response = client.search_stops(&stop_query()).await.unwrap();

    assert!(response.is_empty());
}

#[tokio::test]
async fn test_search_stops_upstream_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/StopPoint"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let err = client.search_stops(&stop_query()).await.unwrap_err();

    assert_eq!(err.upstream_status(), Some(503));
}

#[tokio::test]
async fn test_search_stops_invalid_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/StopPoint"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let err = client.search_stops(&stop_query()).await.unwrap_err();

    assert!(matches!(err, TflError::ParseError(_)));
}

#[tokio::test]
async fn test_arrivals_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/StopPoint/490004290L/Arrivals"))
        .and(query_param("mode", "bus"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_arrivals_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let predictions = client.arrivals(&prediction_query()).await.unwrap();

    assert_eq!(predictions, vec![Prediction::new("237", 794)]);
}

#[tokio::test]
async fn test_arrivals_keeps_every_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/StopPoint/490004290L/Arrivals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "lineName": "237", "timeToStation": 794 },
            { "lineName": "H91", "timeToStation": 120 },
            { "lineName": "237", "timeToStation": 1500 }
        ])))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let predictions = client.arrivals(&prediction_query()).await.unwrap();

    assert_eq!(predictions.len(), 3);
    assert_eq!(predictions[1], Prediction::new("H91", 120));
}

#[tokio::test]
async fn test_arrivals_not_found_status_is_mirrored() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/StopPoint/490004290L/Arrivals"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let err = client.arrivals(&prediction_query()).await.unwrap_err();

    assert_eq!(err.upstream_status(), Some(404));
}

#[tokio::test]
async fn test_arrivals_rate_limited_status_is_mirrored() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/StopPoint/490004290L/Arrivals"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let err = client.arrivals(&prediction_query()).await.unwrap_err();

    assert_eq!(err.upstream_status(), Some(429));
}

#[tokio::test]
async fn test_arrivals_invalid_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/StopPoint/490004290L/Arrivals"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let err = client.arrivals(&prediction_query()).await.unwrap_err();

    assert!(matches!(err, TflError::ParseError(_)));
}

#[tokio::test]
async fn test_arrivals_naptan_id_is_path_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/StopPoint/a%2Fb/Arrivals"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let query = PredictionQuery::new(NaptanId::new("a/b").unwrap());
    let predictions = client.arrivals(&query).await.unwrap();

    assert!(predictions.is_empty());
}

#[tokio::test]
async fn test_upstream_client_does_not_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/StopPoint"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let config = TflConfig::for_testing(server.uri());
    let upstream = UpstreamClient::new(&config).unwrap();
    let url = format!("{}/StopPoint", server.uri()).parse().unwrap();

    let outcome = upstream.get(url, &[]).await;

    assert_eq!(outcome.unwrap_err().upstream_status(), Some(500));
}

#[tokio::test]
async fn test_identical_calls_yield_identical_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/StopPoint"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_stop_points_json()))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let first = client.search_stops(&stop_query()).await.unwrap();
    let second = client.search_stops(&stop_query()).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_slow_upstream_times_out_as_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/StopPoint"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sample_stop_points_json())
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = TflConfig {
        timeout_secs: 1,
        ..TflConfig::for_testing(server.uri())
    };
    let client = TflClient::new(&config).unwrap();
    let err = client.search_stops(&stop_query()).await.unwrap_err();

    assert!(matches!(err, TflError::Timeout { timeout_secs: 1 }));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_fractional_time_to_station_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/StopPoint/490004290L/Arrivals"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"[{ "lineName": "237", "timeToStation": 794.0 }]"#),
        )
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let err = client.arrivals(&prediction_query()).await.unwrap_err();

    assert!(matches!(err, TflError::ParseError(_)));
}
