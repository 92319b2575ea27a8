use agence_core::{
    messages,
    models::response::{ApiResponse, ResponseStatus},
};
use axum::http::StatusCode;
use fake::{
    Fake,
    faker::{
        internet::en::SafeEmail,
        name::en::{FirstName, LastName},
    },
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::{TestContext, example_payload};

const CONTACT_PATH: &str = agence_api::routes::contact::CONTACT_PATH;

#[tokio::test]
async fn test_submit_contact_created() {
    let mut ctx = TestContext::new();
    ctx.contacts
        .expect_save_submission()
        .times(1)
        .withf(|contact, slots| {
            contact.civilite == "M"
                && contact.nom == "Dupont"
                && contact.prenom == "Jean"
                && contact.email == "jean@x.com"
                && contact.telephone.is_empty()
                && contact.message.is_empty()
                && contact.motif_contact == "etre_rappele"
                && slots.len() == 1
                && slots[0] == "2025-01-06 09:00:00"
        })
        .returning(|_, _| Ok(Uuid::new_v4()));
    let server = ctx.server();

    let response = server.post(CONTACT_PATH).json(&example_payload()).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<ApiResponse>();
    assert_eq!(body.status, ResponseStatus::Success);
    assert_eq!(body.message, messages::SUBMISSION_SAVED);
}

#[tokio::test]
async fn test_submit_contact_sanitizes_before_storing() {
    let mut ctx = TestContext::new();
    ctx.contacts
        .expect_save_submission()
        .times(1)
        .withf(|contact, slots| {
            contact.nom == "Dupont"
                && contact.message == "Bonjour"
                && contact.email == "jean@x.com"
                && slots.is_empty()
        })
        .returning(|_, _| Ok(Uuid::new_v4()));
    let server = ctx.server();

    let mut payload = example_payload();
    payload["nom"] = json!("  <b>Dupont</b> ");
    payload["message"] = json!("<p>Bonjour</p>");
    payload["email"] = json!(" jean@x.com ");
    payload["disponibilites"] = json!(["", ""]);

    let response = server.post(CONTACT_PATH).json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_submit_contact_with_generated_identity() {
    let email: String = SafeEmail().fake();
    let expected_email = email.clone();

    let mut ctx = TestContext::new();
    ctx.contacts
        .expect_save_submission()
        .times(1)
        .withf(move |contact, _| contact.email == expected_email)
        .returning(|_, _| Ok(Uuid::new_v4()));
    let server = ctx.server();

    let payload = json!({
        "civilite": "Mme",
        "nom": LastName().fake::<String>(),
        "prenom": FirstName().fake::<String>(),
        "email": email,
        "telephone": "06 12 34 56 78",
        "message": "Je souhaite plus de photos du séjour.",
        "motif_contact": "plus_photos",
        "disponibilites": []
    });

    let response = server.post(CONTACT_PATH).json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_submit_contact_passes_malformed_slots_to_storage() {
    let mut ctx = TestContext::new();
    ctx.contacts
        .expect_save_submission()
        .times(1)
        .withf(|_, slots| slots.len() == 1 && slots[0] == "n'importe quand")
        .returning(|_, _| Ok(Uuid::new_v4()));
    let server = ctx.server();

    let mut payload = example_payload();
    payload["disponibilites"] = json!(["n'importe quand"]);

    let response = server.post(CONTACT_PATH).json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_submit_contact_coerces_loose_field_types() {
    let mut ctx = TestContext::new();
    ctx.contacts
        .expect_save_submission()
        .times(1)
        .withf(|contact, slots| {
            contact.telephone == "612345678"
                && slots.len() == 1
                && slots[0] == "2025-01-06 09:00:00"
        })
        .returning(|_, _| Ok(Uuid::new_v4()));
    let server = ctx.server();

    let mut payload = example_payload();
    payload["telephone"] = json!(612345678);
    payload["disponibilites"] = json!(["2025-01-06 09:00:00", null]);

    let response = server.post(CONTACT_PATH).json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(
        response.json::<ApiResponse>(),
        ApiResponse::success(messages::SUBMISSION_SAVED)
    );
}

#[tokio::test]
async fn test_submit_contact_ignores_non_array_slots() {
    let mut ctx = TestContext::new();
    ctx.contacts
        .expect_save_submission()
        .times(1)
        .withf(|_, slots| slots.is_empty())
        .returning(|_, _| Ok(Uuid::new_v4()));
    let server = ctx.server();

    let mut payload = example_payload();
    payload["disponibilites"] = json!("lundi");

    let response = server.post(CONTACT_PATH).json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[rstest]
#[case::empty_body("")]
#[case::not_json("civilite=M&nom=Dupont")]
#[case::empty_object("{}")]
#[case::array("[]")]
#[case::null("null")]
#[tokio::test]
async fn test_submit_contact_bad_request(#[case] body: &str) {
    let mut ctx = TestContext::new();
    ctx.contacts.expect_save_submission().never();
    let server = ctx.server();

    let response = server.post(CONTACT_PATH).text(body).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<ApiResponse>(),
        ApiResponse::error(messages::NO_DATA_RECEIVED)
    );
}

#[rstest]
#[case::missing_email("email", Value::Null)]
#[case::invalid_email("email", json!("jean-at-x.com"))]
#[case::missing_civility("civilite", json!(""))]
#[case::missing_last_name("nom", json!("   "))]
#[case::missing_first_name("prenom", Value::Null)]
#[case::missing_reason("motif_contact", json!(""))]
#[tokio::test]
async fn test_submit_contact_unprocessable(#[case] field: &str, #[case] value: Value) {
    let mut ctx = TestContext::new();
    ctx.contacts.expect_save_submission().never();
    let server = ctx.server();

    let mut payload = example_payload();
    payload[field] = value;

    let response = server.post(CONTACT_PATH).json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<ApiResponse>(),
        ApiResponse::error(messages::INVALID_REQUIRED_FIELDS)
    );
}

#[tokio::test]
async fn test_submit_contact_without_email_key() {
    let mut ctx = TestContext::new();
    ctx.contacts.expect_save_submission().never();
    let server = ctx.server();

    let mut payload = example_payload();
    payload.as_object_mut().unwrap().remove("email");

    let response = server.post(CONTACT_PATH).json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test_log::test(tokio::test)]
async fn test_submit_contact_storage_failure_is_generic() {
    let mut ctx = TestContext::new();
    ctx.contacts
        .expect_save_submission()
        .times(1)
        .returning(|_, _| {
            Err(eyre::eyre!(
                "invalid input syntax for type timestamp: \"n'importe quand\""
            ))
        });
    let server = ctx.server();

    let response = server.post(CONTACT_PATH).json(&example_payload()).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<ApiResponse>();
    assert_eq!(body, ApiResponse::error(messages::STORAGE_FAILURE));
    assert!(!response.text().contains("timestamp"));
}
