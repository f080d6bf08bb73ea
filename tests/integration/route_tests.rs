//! HTTP route tests through `actix_web::test`

#[cfg(test)]
mod tests {
    use crate::common::MessageFactory;
    use actix_web::{http::StatusCode, test, web};
    use partpulse::config::{Config, NotificationConfig};
    use partpulse::server::{AppState, create_app};
    use partpulse::{MemoryFallbackSink, NotificationDispatcher};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fallback_state() -> (web::Data<AppState>, Arc<MemoryFallbackSink>) {
        let sink = Arc::new(MemoryFallbackSink::new());
        let config = Config::default();
        let dispatcher =
            NotificationDispatcher::with_parts(config.notification.clone(), None, sink.clone());
        (
            web::Data::new(AppState::with_dispatcher(config, dispatcher)),
            sink,
        )
    }

    /// A transfer form exactly as the legacy page posts it
    fn legacy_form(part_number: &str) -> Value {
        json!({
            "id": "1736497800000",
            "date": "2025-01-10",
            "ssidPsidType": "SSID",
            "ssidPsidValue": "1234",
            "poNumber": "",
            "siteName": "",
            "quantity": "2",
            "partNumber": part_number,
            "description": "gasket",
        })
    }

    #[actix_web::test]
    async fn test_health() {
        let (state, _sink) = fallback_state();
        let app = test::init_service(create_app(state)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("server").unwrap(), "PartPulse");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "healthy");
        assert_eq!(body["data"]["transport"], "fallback");
    }

    #[actix_web::test]
    async fn test_submit_batch() {
        let (state, sink) = fallback_state();
        let app = test::init_service(create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/notifications")
            .set_json(MessageFactory::transfers(3))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["recordsCount"], 3);
        assert_eq!(body["data"]["deliveredViaFallback"], true);
        assert!(body["data"]["dispatchId"].is_string());
        assert_eq!(sink.len(), 1);
    }

    #[actix_web::test]
    async fn test_legacy_path_accepts_forms_without_kind() {
        let (state, sink) = fallback_state();
        let app = test::init_service(create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/send-internal-transfer-email")
            .set_json(json!({
                "forms": [legacy_form("PT-1"), legacy_form("PT-2")],
                "technicianName": "Current User",
                "submittedAt": "2025-01-10T08:30:00.000Z",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["recordsCount"], 2);
        assert!(sink.records()[0].html.contains("This submission contains 2 parts."));
    }

    #[actix_web::test]
    async fn test_empty_batch_is_bad_request() {
        let (state, sink) = fallback_state();
        let app = test::init_service(create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/send-internal-transfer-email")
            .set_json(json!({
                "forms": [],
                "technicianName": "Current User",
                "submittedAt": "2025-01-10T08:30:00Z",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "EMPTY_BATCH");
        assert!(sink.is_empty());
    }

    #[actix_web::test]
    async fn test_incomplete_batch_is_bad_request() {
        let (state, sink) = fallback_state();
        let app = test::init_service(create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/send-internal-transfer-email")
            .set_json(json!({
                "forms": [legacy_form("PT-1"), legacy_form("")],
                "technicianName": "Current User",
                "submittedAt": "2025-01-10T08:30:00Z",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(
            body["error"]["message"]
                .as_str()
                .unwrap()
                .contains("record 2 is missing partNumber")
        );
        assert!(sink.is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let (state, _sink) = fallback_state();
        let app = test::init_service(create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/notifications")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"forms\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[actix_web::test]
    async fn test_transport_failure_is_bad_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
            .mount(&server)
            .await;

        let mut config = Config::default();
        config.notification = NotificationConfig {
            api_key: Some("re_test".to_string()),
            api_base: server.uri(),
            ..Default::default()
        };
        let state = web::Data::new(AppState::new(config).unwrap());
        let app = test::init_service(create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/notifications")
            .set_json(MessageFactory::transfers(1))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "TRANSPORT_ERROR");
        assert_eq!(body["error"]["message"], "Transport error: boom");
    }
}
