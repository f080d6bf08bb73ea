//! Batch submission scenarios
//!
//! Each test drives a `BatchForm` from first edit to submission through a
//! real `NotificationDispatcher`.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{DraftFactory, TRANSFER_VALUES};
    use partpulse::config::NotificationConfig;
    use partpulse::{
        BatchForm, MemoryFallbackSink, NotificationDispatcher, PartPulseError, RecordKind,
        SubmitOutcome,
    };
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fallback_dispatcher() -> (NotificationDispatcher, Arc<MemoryFallbackSink>) {
        let sink = Arc::new(MemoryFallbackSink::new());
        let dispatcher =
            NotificationDispatcher::with_parts(NotificationConfig::default(), None, sink.clone());
        (dispatcher, sink)
    }

    /// One complete transfer, no transport configured
    #[tokio::test]
    async fn test_single_transfer_delivered_via_fallback() {
        let (dispatcher, sink) = fallback_dispatcher();
        let mut form = BatchForm::new(RecordKind::InternalTransfer, "Current User");
        let original_id = form.first_id();
        DraftFactory::fill(&mut form, original_id, TRANSFER_VALUES);

        assert!(form.validate_for_submission().is_valid());

        let receipt = match form.submit(&dispatcher).await.unwrap() {
            SubmitOutcome::Submitted(receipt) => receipt,
            SubmitOutcome::Rejected(failures) => panic!("unexpected rejection: {}", failures),
        };
        assert!(receipt.delivered_via_fallback);
        assert_eq!(receipt.records_count, 1);

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].dispatch_id, receipt.dispatch_id);
        assert!(records[0].subject.starts_with("Internal Parts Transfer - SSID 1234 - "));
        assert!(records[0].html.contains("<td>PT-1</td>"));
        assert!(records[0].html.contains("<td>gasket</td>"));

        // Reset to one fresh draft with an id never used before
        assert_eq!(form.len(), 1);
        assert_ne!(form.first_id(), original_id);
        let fresh = &form.drafts()[0];
        assert_eq!(fresh.value("partNumber"), "");
        assert_eq!(
            fresh.missing_required_fields(),
            vec!["ssidPsidType", "ssidPsidValue", "quantity", "partNumber", "description"]
        );
    }

    /// Second draft missing its part number
    #[tokio::test]
    async fn test_incomplete_batch_rejected_whole() {
        let (dispatcher, sink) = fallback_dispatcher();
        let mut form = BatchForm::new(RecordKind::InternalTransfer, "Current User");
        let first = form.first_id();
        DraftFactory::fill(&mut form, first, TRANSFER_VALUES);
        let second = form.add_draft();
        DraftFactory::fill(
            &mut form,
            second,
            &TRANSFER_VALUES
                .iter()
                .copied()
                .filter(|(name, _)| *name != "partNumber")
                .collect::<Vec<_>>(),
        );
        let before = form.drafts().to_vec();

        let failures = match form.submit(&dispatcher).await.unwrap() {
            SubmitOutcome::Rejected(failures) => failures,
            SubmitOutcome::Submitted(receipt) => panic!("unexpected submission: {:?}", receipt),
        };

        assert_eq!(failures.len(), 1);
        let failure = &failures.failures()[0];
        assert_eq!(failure.draft_index, 1);
        assert_eq!(failure.missing_fields, vec!["partNumber"]);

        assert_eq!(form.drafts(), before.as_slice());
        assert!(sink.is_empty());
    }

    /// Transport configured but failing, then recovering
    #[tokio::test]
    async fn test_transport_failure_keeps_batch_for_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(json!({"statusCode": 500, "message": "Internal server error"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = NotificationConfig {
            api_key: Some("re_test".to_string()),
            api_base: server.uri(),
            ..Default::default()
        };
        let dispatcher = NotificationDispatcher::new(config).unwrap();
        assert_eq!(dispatcher.transport_name(), "resend");

        let mut form = BatchForm::new(RecordKind::InternalTransfer, "Current User");
        let id = form.first_id();
        DraftFactory::fill(&mut form, id, TRANSFER_VALUES);
        let before = form.drafts().to_vec();

        let err = form.submit(&dispatcher).await.unwrap_err();
        match &err {
            PartPulseError::Transport { status, detail } => {
                assert_eq!(*status, Some(500));
                assert_eq!(detail, "Internal server error");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.is_retryable());
        assert_eq!(form.drafts(), before.as_slice());

        server.verify().await;
        server.reset().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "email-42"})))
            .expect(1)
            .mount(&server)
            .await;

        match form.submit(&dispatcher).await.unwrap() {
            SubmitOutcome::Submitted(receipt) => {
                assert!(!receipt.delivered_via_fallback);
                assert_eq!(receipt.message_id.as_deref(), Some("email-42"));
            }
            SubmitOutcome::Rejected(failures) => panic!("unexpected rejection: {}", failures),
        }
        assert_eq!(form.len(), 1);
        assert_ne!(form.first_id(), id);
    }

    #[tokio::test]
    async fn test_warranty_claim_batch() {
        let (dispatcher, sink) = fallback_dispatcher();
        let mut form = BatchForm::new(RecordKind::WarrantyClaim, "Current User");
        let id = form.first_id();
        DraftFactory::fill(&mut form, id, crate::common::fixtures::CLAIM_VALUES);

        let outcome = form.submit(&dispatcher).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Submitted(_)));

        let record = &sink.records()[0];
        assert!(record.subject.starts_with("Warranty Claim - SSID 5501 - "));
        assert!(record.html.contains("<td>North Tower</td>"));
    }
}
