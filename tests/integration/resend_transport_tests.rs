//! Resend transport against a local mock server

#[cfg(test)]
mod tests {
    use crate::common::MessageFactory;
    use partpulse::PartPulseError;
    use partpulse::core::notification::{
        DeliveryOutcome, EmailTransport, OutboundEmail, ResendTransport, render,
    };
    use partpulse::config::NotificationConfig;
    use partpulse::{MemoryFallbackSink, NotificationDispatcher};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn email() -> OutboundEmail {
        let document = render(&MessageFactory::transfers(2)).unwrap();
        OutboundEmail {
            from: "onboarding@resend.dev".to_string(),
            to: vec!["parts-office@partpulse.local".to_string()],
            subject: document.subject,
            html: document.html,
        }
    }

    #[tokio::test]
    async fn test_send_posts_bearer_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("authorization", "Bearer re_test"))
            .and(body_partial_json(json!({
                "from": "onboarding@resend.dev",
                "to": ["parts-office@partpulse.local"],
                "subject": "Internal Parts Transfer - SSID 1234 - 2025-01-10",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "49a3999c"})))
            .expect(1)
            .mount(&server)
            .await;

        let transport =
            ResendTransport::new("re_test", &server.uri(), Duration::from_secs(5)).unwrap();
        let receipt = transport.send(&email()).await.unwrap();

        assert_eq!(receipt.id.as_deref(), Some("49a3999c"));
        assert_eq!(transport.name(), "resend");
    }

    #[tokio::test]
    async fn test_rejection_carries_status_and_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "statusCode": 422,
                "name": "validation_error",
                "message": "Invalid `to` field.",
            })))
            .mount(&server)
            .await;

        let transport =
            ResendTransport::new("re_test", &server.uri(), Duration::from_secs(5)).unwrap();
        let err = transport.send(&email()).await.unwrap_err();

        match err {
            PartPulseError::Transport { status, detail } => {
                assert_eq!(status, Some(422));
                assert_eq!(detail, "Invalid `to` field.");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_plain_text_rejection_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let transport =
            ResendTransport::new("re_test", &server.uri(), Duration::from_secs(5)).unwrap();
        let err = transport.send(&email()).await.unwrap_err();

        assert!(matches!(
            err,
            PartPulseError::Transport { status: Some(503), ref detail } if detail == "upstream unavailable"
        ));
    }

    #[tokio::test]
    async fn test_unreachable_transport_is_transport_error() {
        // Nothing listens on port 1
        let transport =
            ResendTransport::new("re_test", "http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
        let err = transport.send(&email()).await.unwrap_err();
        assert!(matches!(err, PartPulseError::Transport { status: None, .. }));
    }

    #[tokio::test]
    async fn test_dispatcher_deliver_maps_outcomes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "API key is invalid"})))
            .mount(&server)
            .await;

        let config = NotificationConfig {
            api_key: Some("re_bad".to_string()),
            api_base: server.uri(),
            ..Default::default()
        };
        let transport = ResendTransport::from_config(&config).unwrap().unwrap();
        let sink = Arc::new(MemoryFallbackSink::new());
        let dispatcher =
            NotificationDispatcher::with_parts(config, Some(Arc::new(transport)), sink.clone());

        let document = dispatcher.render(&MessageFactory::transfers(1)).unwrap();
        let outcome = dispatcher
            .deliver(&document, "parts-office@partpulse.local")
            .await;

        assert_eq!(
            outcome,
            DeliveryOutcome::TransportError {
                status: Some(401),
                detail: "API key is invalid".to_string(),
            }
        );
        assert!(sink.is_empty());
    }
}
