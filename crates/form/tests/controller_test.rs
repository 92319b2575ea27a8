use agence_core::{
    messages,
    models::{
        contact::{Civilite, ContactSubmission, MotifContact},
        response::ApiResponse,
    },
};
use agence_form::{
    ContactTransport, FormController, SubmitError,
    state::{FormMsg, Notice, TextField},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use pretty_assertions::assert_eq;

mock! {
    pub Transport {}

    #[async_trait]
    impl ContactTransport for Transport {
        async fn post_contact(&self, payload: &ContactSubmission) -> Result<ApiResponse, SubmitError>;
    }
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

async fn fill(form: &mut FormController<MockTransport>) {
    form.dispatch(FormMsg::SetCivilite(Some(Civilite::M))).await;
    form.dispatch(FormMsg::EditText(TextField::Nom, "Dupont".to_string())).await;
    form.dispatch(FormMsg::EditText(TextField::Prenom, "Jean".to_string())).await;
    form.dispatch(FormMsg::EditText(TextField::Email, "jean@x.com".to_string())).await;
    form.dispatch(FormMsg::SetMotif(Some(MotifContact::EtreRappele))).await;
}

#[tokio::test]
async fn test_missing_required_field_never_reaches_transport() {
    let mut transport = MockTransport::new();
    transport.expect_post_contact().never();
    let mut form = FormController::new(transport);

    form.dispatch(FormMsg::EditText(TextField::Nom, "Dupont".to_string())).await;
    form.submit_on(monday()).await;

    assert_eq!(
        form.state().notice,
        Some(Notice::Error(messages::MISSING_REQUIRED_FIELDS.to_string()))
    );
}

#[tokio::test]
async fn test_successful_submission_round_trip() {
    let mut transport = MockTransport::new();
    transport
        .expect_post_contact()
        .times(1)
        .withf(|payload| {
            payload.nom == "Dupont" && payload.disponibilites == vec!["2025-01-06 07:00:00".to_string()]
        })
        .returning(|_| Ok(ApiResponse::success(messages::SUBMISSION_SAVED)));
    let mut form = FormController::new(transport);

    fill(&mut form).await;
    form.dispatch(FormMsg::AddSlot).await;
    form.submit_on(monday()).await;

    let state = form.state();
    assert!(!state.is_submitting);
    assert!(state.form.nom.is_empty());
    assert!(state.form.disponibilites.is_empty());
    assert_eq!(
        state.notice,
        Some(Notice::Success(messages::SUBMISSION_SAVED.to_string()))
    );
}

#[tokio::test]
async fn test_transport_failure_keeps_entries() {
    let mut transport = MockTransport::new();
    transport
        .expect_post_contact()
        .times(1)
        .returning(|_| Err(SubmitError::Unreachable("connection refused".to_string())));
    let mut form = FormController::new(transport);

    fill(&mut form).await;
    form.submit_on(monday()).await;

    let state = form.state();
    assert!(!state.is_submitting);
    assert_eq!(state.form.nom, "Dupont");
    assert_eq!(
        state.notice,
        Some(Notice::Error(messages::SERVER_UNREACHABLE.to_string()))
    );
}
