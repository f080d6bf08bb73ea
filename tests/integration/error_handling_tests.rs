//! Error handling integration tests
//!
//! Verifies that each error reaches HTTP callers with the right status and
//! code, and that internal details stay hidden.

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use partpulse::core::batch::check_drafts;
    use partpulse::utils::error::ErrorResponse;
    use partpulse::{PartPulseError, RecordDraft};

    async fn error_body(err: &PartPulseError) -> ErrorResponse {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_validation_failure_flow() {
        let drafts = vec![crate::common::MessageFactory::transfers(1).drafts()[0].clone()];
        let mut incomplete: Vec<RecordDraft> = drafts.clone();
        incomplete[0].set_field("description", "").unwrap();

        let err = check_drafts(&incomplete).unwrap_err();
        assert_eq!(err.status_code().as_u16(), 400);

        let body = error_body(&err).await;
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        assert!(body.error.message.contains("record 1 is missing description"));
        assert!(check_drafts(&drafts).is_ok());
    }

    #[actix_web::test]
    async fn test_transport_error_flow() {
        let err = PartPulseError::transport(Some(500), "provider down");
        assert_eq!(err.status_code().as_u16(), 502);
        assert!(err.is_retryable());

        let body = error_body(&err).await;
        assert_eq!(body.error.code, "TRANSPORT_ERROR");
        assert_eq!(body.error.message, "Transport error: provider down");
    }

    #[actix_web::test]
    async fn test_internal_details_hidden() {
        let err = PartPulseError::internal("dispatch state corrupted");
        assert_eq!(err.status_code().as_u16(), 500);

        let body = error_body(&err).await;
        assert_eq!(body.error.code, "INTERNAL_ERROR");
        assert!(!body.error.message.contains("corrupted"));
    }

    #[test]
    fn test_empty_batch_is_not_retryable() {
        let err = check_drafts(&[]).unwrap_err();
        assert!(matches!(err, PartPulseError::EmptyBatch));
        assert!(!err.is_retryable());
        assert_eq!(err.status_code().as_u16(), 400);
    }
}
