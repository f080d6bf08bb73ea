//! HTTP submission client against a local mock server

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{DraftFactory, TRANSFER_VALUES};
    use partpulse::{
        BatchForm, HttpSubmissionClient, PartPulseError, RecordKind, SubmissionTransport,
        SubmitOutcome,
    };
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn filled_form() -> BatchForm {
        let mut form = BatchForm::new(RecordKind::InternalTransfer, "Current User");
        let id = form.first_id();
        DraftFactory::fill(&mut form, id, TRANSFER_VALUES);
        form
    }

    #[tokio::test]
    async fn test_submit_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/notifications"))
            .and(body_partial_json(json!({
                "technicianName": "Current User",
                "forms": [{ "kind": "internal_transfer", "partNumber": "PT-1" }],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {
                    "dispatchId": "0b9c2a36-2f8c-4a43-9d0a-6f1f6c1f2f10",
                    "recordsCount": 1,
                    "deliveredViaFallback": false,
                    "messageId": "email-1",
                },
                "meta": { "message": "Email sent successfully" },
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpSubmissionClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
        let mut form = filled_form();

        match form.submit(&client).await.unwrap() {
            SubmitOutcome::Submitted(receipt) => {
                assert_eq!(receipt.records_count, 1);
                assert_eq!(receipt.message_id.as_deref(), Some("email-1"));
            }
            SubmitOutcome::Rejected(failures) => panic!("unexpected rejection: {}", failures),
        }
        assert_eq!(form.drafts()[0].value("partNumber"), "");
    }

    #[tokio::test]
    async fn test_server_transport_error_keeps_batch() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_json(json!({
                "error": {
                    "code": "TRANSPORT_ERROR",
                    "message": "Transport error: boom",
                    "timestamp": 1736497800,
                    "request_id": null,
                }
            })))
            .mount(&server)
            .await;

        let client = HttpSubmissionClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
        let mut form = filled_form();
        let before = form.drafts().to_vec();

        let err = form.submit(&client).await.unwrap_err();
        assert!(matches!(
            err,
            PartPulseError::Transport {
                status: Some(502),
                ..
            }
        ));
        assert!(err.is_retryable());
        assert_eq!(form.drafts(), before.as_slice());
    }

    #[tokio::test]
    async fn test_server_mounted_under_prefix() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/partpulse/api/notifications"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {
                    "dispatchId": "0b9c2a36-2f8c-4a43-9d0a-6f1f6c1f2f10",
                    "recordsCount": 1,
                    "deliveredViaFallback": true,
                },
            })))
            .expect(1)
            .mount(&server)
            .await;

        let base = format!("{}/partpulse", server.uri());
        let client = HttpSubmissionClient::new(&base, Duration::from_secs(5)).unwrap();
        let mut form = filled_form();

        let outcome = form.submit(&client).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Submitted(ref r) if r.delivered_via_fallback));
    }

    #[tokio::test]
    async fn test_incomplete_batch_never_reaches_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = HttpSubmissionClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
        let mut form = BatchForm::new(RecordKind::InternalTransfer, "Current User");

        let outcome = form.submit(&client).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    }

    #[tokio::test]
    async fn test_receiptless_success_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&server)
            .await;

        let client = HttpSubmissionClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
        let message = crate::common::MessageFactory::transfers(1);

        let err = client.submit(&message).await.unwrap_err();
        assert!(matches!(err, PartPulseError::Internal(_)));
    }
}
