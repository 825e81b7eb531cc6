//! End-to-end flows through the HTTP gateway, a file-backed store and a
//! recording view, against a mock backend.

use std::time::Duration;

use chrono::Utc;
use weather_core::{
    Controller, FileStore, HttpGateway, Intent, MemoryView, Panel, Renderer, Timings, UiState,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn paris_envelope(with_forecast: bool) -> serde_json::Value {
    let mut envelope = serde_json::json!({
        "current": {
            "city": "Paris", "country": "FR", "temperature": 18,
            "description": "Clear Sky", "weather_icon": "01d",
            "feels_like": 17, "humidity": 60, "wind_speed": 3.5, "wind_direction": 200,
            "pressure": 1015, "visibility": 10, "weather_main": "Clear",
            "sunrise": 1700000000, "sunset": 1700030000, "timezone": 3600
        }
    });
    if with_forecast {
        envelope["forecast"] = serde_json::json!({
            "daily": [
                {"date": "2023-11-14", "timestamp": 1700000000, "icon": "01d",
                 "description": "Clear Sky", "temp_max": 19, "temp_min": 9,
                 "humidity": 55, "wind_speed": 3.1},
                {"date": "2023-11-15", "timestamp": 1700086400, "icon": "10d",
                 "description": "Light Rain", "temp_max": 14, "temp_min": 8,
                 "humidity": 80, "wind_speed": 4.2}
            ],
            "hourly": [
                {"time": "2023-11-14 21:00:00", "timestamp": 1700000000, "icon": "01n",
                 "description": "Clear Sky", "temperature": 15, "humidity": 60, "wind_speed": 3}
            ]
        });
    }
    envelope
}

async fn mount_city(server: &MockServer, city: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/get_weather"))
        .and(body_json(serde_json::json!({ "city": city })))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

fn controller(
    server: &MockServer,
    store: FileStore,
) -> Controller<HttpGateway, FileStore, MemoryView, Utc> {
    let gateway = HttpGateway::new(&server.uri(), Duration::from_secs(5)).unwrap();
    Controller::new(gateway, store, MemoryView::new(), Renderer::new(Utc), Timings::ZERO)
}

#[tokio::test]
async fn search_renders_and_is_restored_on_next_start() {
    let server = MockServer::start().await;
    mount_city(&server, "Paris", 200, paris_envelope(true)).await;
    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("last_search.json");

    let mut first = controller(&server, FileStore::new(&store_path));
    first.dispatch(Intent::InputChanged(" Paris ".into())).await;
    first.dispatch(Intent::Submit).await;

    let view = first.view();
    let current = view.current.as_ref().unwrap();
    assert_eq!(current.city_label, "Paris, FR");
    assert_eq!(current.sunrise, "11:13 PM");
    assert_eq!(view.daily.len(), 2);
    assert_eq!(view.daily[0].day_label, "Today");
    assert_eq!(view.daily[1].day_label, "Wed");
    assert_eq!(view.hourly[0].time_label, "10 PM");

    // A fresh session picks the city up from disk and searches again.
    let mut second = controller(&server, FileStore::new(&store_path));
    second.startup().await;

    assert!(matches!(second.state(), UiState::Result(_)));
    assert_eq!(second.view().input, "Paris");
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn backend_error_is_shown_and_nothing_is_saved() {
    let server = MockServer::start().await;
    mount_city(&server, "Atlantis", 404, serde_json::json!({ "error": "City not found" })).await;
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("last_search.json"));

    let mut ctl = controller(&server, store);
    ctl.dispatch(Intent::InputChanged("Atlantis".into())).await;
    ctl.dispatch(Intent::Submit).await;

    assert_eq!(ctl.state(), &UiState::Error("City not found".into()));
    assert_eq!(ctl.view().error_text, "City not found");
    assert_eq!(ctl.last_search().load(), None);
}

#[tokio::test]
async fn missing_forecast_leaves_containers_empty() {
    let server = MockServer::start().await;
    mount_city(&server, "Paris", 200, paris_envelope(false)).await;
    let dir = tempfile::tempdir().unwrap();

    let mut ctl = controller(&server, FileStore::new(dir.path().join("s.json")));
    ctl.dispatch(Intent::InputChanged("Paris".into())).await;
    ctl.dispatch(Intent::Submit).await;

    let view = ctl.view();
    assert!(view.is_visible(Panel::Result));
    assert!(!view.is_visible(Panel::Error));
    assert!(view.daily.is_empty());
    assert!(view.hourly.is_empty());
}
