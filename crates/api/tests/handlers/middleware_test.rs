use agence_api::middleware::error_handling::{AppError, map_error};
use agence_core::{errors::ContactError, messages, models::response::ApiResponse};
use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use pretty_assertions::assert_eq;
use rstest::rstest;

async fn body_of(response: axum::response::Response) -> ApiResponse {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[rstest]
#[case(ContactError::MalformedBody(messages::NO_DATA_RECEIVED.to_string()), StatusCode::BAD_REQUEST)]
#[case(ContactError::Validation(messages::INVALID_REQUIRED_FIELDS.to_string()), StatusCode::UNPROCESSABLE_ENTITY)]
#[case(ContactError::Database(eyre::eyre!("connection refused")), StatusCode::INTERNAL_SERVER_ERROR)]
#[tokio::test]
async fn test_error_status_mapping(#[case] error: ContactError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[tokio::test]
async fn test_validation_error_body() {
    let error = AppError(ContactError::Validation(
        messages::INVALID_REQUIRED_FIELDS.to_string(),
    ));

    let body = body_of(error.into_response()).await;

    assert_eq!(body, ApiResponse::error(messages::INVALID_REQUIRED_FIELDS));
}

#[tokio::test]
async fn test_database_error_body_is_generic() {
    let error: AppError = eyre::eyre!("relation \"contacts\" does not exist").into();

    let body = body_of(error.into_response()).await;

    assert_eq!(body, ApiResponse::error(messages::STORAGE_FAILURE));
    assert!(!body.message.contains("relation"));
}
