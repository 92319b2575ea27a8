//! # Contact Handlers
//!
//! `POST /api/contact` receives the contact form, runs it through the
//! parse → sanitize → validate pipeline from `agence-core` and hands the
//! result to the repository as one transactional unit of work.
//!
//! | outcome                         | status | message                    |
//! |---------------------------------|--------|----------------------------|
//! | saved                           | 201    | success message            |
//! | empty or unparseable body       | 400    | "no data received"         |
//! | missing required field / email  | 422    | required fields reminder   |
//! | storage failure (rolled back)   | 500    | generic retry message      |

use agence_core::{
    errors::ContactError,
    messages,
    models::response::ApiResponse,
    validation::{parse_submission, validate_submission},
};
use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{ApiState, middleware::error_handling::AppError};

/// Stores one contact form submission.
///
/// The body is taken as raw bytes so that an empty or non-JSON body maps
/// to the endpoint's own 400 response instead of axum's rejection.
#[axum::debug_handler]
pub async fn submit_contact(
    State(state): State<Arc<ApiState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<ApiResponse>), AppError> {
    let submission = parse_submission(&body)?;
    let valid = validate_submission(submission).inspect_err(|err| {
        debug!("Rejected contact submission: {}", err);
    })?;

    let contact_id = state
        .contacts
        .save_submission(&valid.contact, &valid.disponibilites)
        .await
        .map_err(ContactError::Database)?;

    info!(
        %contact_id,
        motif = %valid.contact.motif_contact,
        slots = valid.disponibilites.len(),
        "Contact submission saved"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(messages::SUBMISSION_SAVED)),
    ))
}
