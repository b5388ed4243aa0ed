use schemadeck_ui::state::AppState;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The entity payload the mock project API serves for table 1.
pub fn orders_payload() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "schema": "public",
        "name": "orders",
        "kind": "table",
        "columns": [
            {
                "name": "id",
                "data_type": "bigint",
                "format": "int8",
                "is_nullable": false,
                "comment": "primary key"
            },
            {
                "name": "user_id",
                "data_type": "bigint",
                "format": "int8",
                "is_nullable": false
            },
            {
                "name": "email",
                "data_type": "text",
                "format": "text",
                "is_nullable": true
            }
        ]
    })
}

pub async fn setup_app_state() -> (MockServer, AppState) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tables/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(orders_payload()))
        .mount(&mock_server)
        .await;

    let state = AppState::test(mock_server.uri());
    (mock_server, state)
}

#[allow(unused)]
pub async fn setup_app_state_with_status(status_code: u16) -> (MockServer, AppState) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tables/1"))
        .respond_with(ResponseTemplate::new(status_code))
        .mount(&mock_server)
        .await;

    let state = AppState::test(mock_server.uri());
    (mock_server, state)
}
