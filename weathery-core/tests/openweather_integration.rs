//! Integration tests for OpenWeatherProvider using wiremock.

use weathery_core::{
    Locale, OpenWeatherProvider, WeatherError, WeatherProvider, fetch_cities, group_by_day,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn current_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": 37.62, "lat": 55.75},
        "weather": [{"id": 500, "main": "Rain", "description": "небольшой дождь", "icon": "10d"}],
        "main": {"temp": 14.2, "feels_like": 13.6, "pressure": 1009, "humidity": 82},
        "visibility": 8000,
        "wind": {"speed": 4.1, "deg": 230},
        "dt": 1725955200,
        "sys": {"sunrise": 1725936000, "sunset": 1725984000},
        "name": name
    })
}

fn forecast_entry(dt: i64, dt_txt: &str, pod: &str) -> serde_json::Value {
    serde_json::json!({
        "dt": dt,
        "main": {"temp": 12.0, "feels_like": 11.2, "pressure": 1011, "humidity": 75},
        "weather": [{"id": 800, "main": "Clear", "description": "ясно", "icon": "01n"}],
        "clouds": {"all": 0},
        "wind": {"speed": 2.0, "deg": 180},
        "visibility": 10000,
        "pop": 0.2,
        "sys": {"pod": pod},
        "dt_txt": dt_txt
    })
}

#[tokio::test]
async fn current_weather_sends_expected_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Москва"))
        .and(query_param("appid", "test_key"))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "ru"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Москва")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = OpenWeatherProvider::with_base_url("test_key".into(), &mock_server.uri());
    let data = provider.current_weather("Москва", Locale::Ru).await.unwrap();

    assert_eq!(data.name, "Москва");
    assert_eq!(data.condition(), Some("Rain"));
    assert_eq!(data.main.humidity, 82);
    assert_eq!(data.wind.deg, 230);
    assert_eq!(data.visibility, 8000);
}

#[tokio::test]
async fn forecast_is_parsed_and_groupable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("lang", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cod": "200",
            "message": 0,
            "cnt": 3,
            "list": [
                forecast_entry(1725937200, "2024-09-10 03:00:00", "n"),
                forecast_entry(1725958800, "2024-09-10 09:00:00", "d"),
                forecast_entry(1726023600, "2024-09-11 03:00:00", "n"),
            ],
            "city": {
                "id": 524901,
                "name": "Moscow",
                "coord": {"lat": 55.7522, "lon": 37.6156},
                "country": "RU",
                "population": 1000000,
                "timezone": 10800,
                "sunrise": 1725936000,
                "sunset": 1725984000
            }
        })))
        .mount(&mock_server)
        .await;

    let provider = OpenWeatherProvider::with_base_url("test_key".into(), &mock_server.uri());
    let forecast = provider.forecast("Moscow", Locale::En).await.unwrap();

    assert_eq!(forecast.cnt, 3);
    assert_eq!(forecast.city.country, "RU");
    assert_eq!(forecast.list[1].sys.pod, "d");

    let today = chrono::NaiveDate::from_ymd_opt(2024, 9, 10).unwrap();
    let grouping = group_by_day(&forecast.list, today, Locale::En);
    let labels: Vec<_> = grouping.days.iter().map(|d| d.day.as_str()).collect();
    assert_eq!(labels, ["Tuesday", "Wednesday"]);
}

#[tokio::test]
async fn unknown_city_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"{"cod":"404","message":"city not found"}"#),
        )
        .mount(&mock_server)
        .await;

    let provider = OpenWeatherProvider::with_base_url("test_key".into(), &mock_server.uri());
    let err = provider.current_weather("Атлантида", Locale::Ru).await.unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("city not found"));
}

#[tokio::test]
async fn unexpected_json_maps_to_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": 42})))
        .mount(&mock_server)
        .await;

    let provider = OpenWeatherProvider::with_base_url("test_key".into(), &mock_server.uri());
    let err = provider.current_weather("Калуга", Locale::Ru).await.unwrap_err();

    assert!(matches!(err, WeatherError::Decode(_)));
}

#[tokio::test]
async fn unreachable_host_maps_to_network_error() {
    // nothing listens on port 1
    let provider = OpenWeatherProvider::with_base_url("test_key".into(), "http://127.0.0.1:1");
    let err = provider.current_weather("Калуга", Locale::Ru).await.unwrap_err();

    assert!(matches!(err, WeatherError::Network(_)));
}

#[tokio::test]
async fn fetch_cities_returns_one_result_per_city() {
    let mock_server = MockServer::start().await;

    for city in ["Москва", "Калуга"] {
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", city))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_body(city)))
            .mount(&mock_server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Нигде"))
        .respond_with(ResponseTemplate::new(404).set_body_string("city not found"))
        .mount(&mock_server)
        .await;

    let provider = OpenWeatherProvider::with_base_url("test_key".into(), &mock_server.uri());
    let cities = vec!["Москва".to_string(), "Нигде".to_string(), "Калуга".to_string()];
    let results = fetch_cities(&provider, &cities, Locale::Ru).await;

    let names: Vec<_> = results
        .iter()
        .map(|r| r.result.as_ref().map(|d| d.name.as_str()).unwrap_or("-"))
        .collect();
    assert_eq!(names, ["Москва", "-", "Калуга"]);
}
