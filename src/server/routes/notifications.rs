//! Batch submission endpoints

use crate::core::batch::SubmissionReceipt;
use crate::core::notification::NotificationMessage;
use crate::core::records::{DraftIdGenerator, RecordKind};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{PartPulseError, Result};
use actix_web::{HttpResponse, web};
use serde_json::{Value, json};
use tracing::{debug, info};

/// Configure submission routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/notifications", web::post().to(submit_notification))
            .route(
                "/send-internal-transfer-email",
                web::post().to(submit_internal_transfer),
            ),
    );
}

/// Dispatch one submitted batch
pub async fn submit_notification(
    state: web::Data<AppState>,
    message: web::Json<NotificationMessage>,
) -> Result<HttpResponse> {
    dispatch(&state, &message.into_inner()).await
}

/// Legacy transfer-form endpoint
///
/// Forms posted here predate the `kind` discriminant; any form without one
/// is read as an internal transfer.
pub async fn submit_internal_transfer(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse> {
    let mut payload = payload.into_inner();
    normalize_legacy_forms(&mut payload);

    let message: NotificationMessage = serde_json::from_value(payload)?;
    dispatch(&state, &message).await
}

/// Bring legacy transfer forms into the current draft shape
///
/// Legacy clients send the id as a millisecond timestamp string. Numeric
/// strings become numbers; anything else gets a fresh id.
fn normalize_legacy_forms(payload: &mut Value) {
    let Some(forms) = payload.get_mut("forms").and_then(Value::as_array_mut) else {
        return;
    };

    let mut ids = DraftIdGenerator::new();
    for form in forms.iter_mut().filter_map(Value::as_object_mut) {
        form.entry("kind")
            .or_insert_with(|| json!(RecordKind::InternalTransfer.as_str()));

        let id = match form.get("id") {
            Some(Value::Number(n)) if n.is_u64() => continue,
            Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        let id = id.unwrap_or_else(|| ids.next_id().get());
        form.insert("id".to_string(), json!(id));
    }
}

async fn dispatch(state: &AppState, message: &NotificationMessage) -> Result<HttpResponse> {
    debug!(
        records = message.records_count(),
        submitter = %message.submitter(),
        "Batch submission received"
    );

    if message.drafts().is_empty() {
        return Err(PartPulseError::EmptyBatch);
    }

    let outcome = state.dispatcher.dispatch(message).await?;
    let summary = if outcome.via_fallback() {
        "Notification logged (no e-mail transport configured)"
    } else {
        "Email sent successfully"
    };
    info!(dispatch_id = %outcome.dispatch_id, "{}", summary);

    let receipt = SubmissionReceipt::from(outcome);
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_meta(
        receipt,
        json!({ "message": summary }),
    )))
}
