//! # Form state
//!
//! The whole form is one value, [`FormState`], and every change goes
//! through [`update`]. The reducer never performs I/O: when the form is
//! ready to be sent it returns a [`Command`] and the caller runs it, then
//! reports the outcome back as [`FormMsg::SubmitCompleted`].

use agence_core::{
    messages,
    models::{
        contact::{Civilite, ContactSubmission, MotifContact},
        response::ApiResponse,
        slot::{Disponibilite, Jour, SlotHour, SlotMinute},
    },
};
use chrono::NaiveDate;

use crate::transport::SubmitError;

/// Fields the visitor fills in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub civilite: Option<Civilite>,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    pub message: String,
    pub motif_contact: Option<MotifContact>,
    pub disponibilites: Vec<Disponibilite>,
}

impl ContactForm {
    /// True when civility, names, email and contact reason are all set.
    /// Phone and message may stay empty.
    pub fn has_required_fields(&self) -> bool {
        self.civilite.is_some()
            && !self.nom.is_empty()
            && !self.prenom.is_empty()
            && !self.email.is_empty()
            && self.motif_contact.is_some()
    }

    /// Request body for the endpoint, with every slot projected from `today`.
    pub fn to_submission(&self, today: NaiveDate) -> ContactSubmission {
        ContactSubmission {
            civilite: self.civilite.map(|c| c.as_str().to_string()).unwrap_or_default(),
            nom: self.nom.clone(),
            prenom: self.prenom.clone(),
            email: self.email.clone(),
            telephone: self.telephone.clone(),
            message: self.message.clone(),
            motif_contact: self
                .motif_contact
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            disponibilites: self
                .disponibilites
                .iter()
                .map(|slot| slot.to_timestamp(today))
                .collect(),
        }
    }
}

/// Slot being composed in the three selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftSlot {
    pub day: Option<Jour>,
    pub hour: Option<SlotHour>,
    pub minute: Option<SlotMinute>,
}

impl Default for DraftSlot {
    fn default() -> Self {
        Self {
            day: Some(Jour::Lundi),
            hour: Some(SlotHour::default()),
            minute: Some(SlotMinute::M00),
        }
    }
}

impl DraftSlot {
    pub fn complete(&self) -> Option<Disponibilite> {
        Some(Disponibilite::new(self.day?, self.hour?, self.minute?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text.as_str(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub form: ContactForm,
    pub draft: DraftSlot,
    pub notice: Option<Notice>,
    /// Set while a request is in flight; the submit control is disabled.
    pub is_submitting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Nom,
    Prenom,
    Email,
    Telephone,
    Message,
}

#[derive(Debug)]
pub enum FormMsg {
    EditText(TextField, String),
    SetCivilite(Option<Civilite>),
    SetMotif(Option<MotifContact>),
    SetDraftDay(Option<Jour>),
    SetDraftHour(Option<SlotHour>),
    SetDraftMinute(Option<SlotMinute>),
    AddSlot,
    RemoveSlot(usize),
    /// `today` anchors the weekday projection of every slot.
    Submit { today: NaiveDate },
    SubmitCompleted(Result<ApiResponse, SubmitError>),
}

/// Side effect requested by [`update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(ContactSubmission),
}

pub fn update(mut state: FormState, msg: FormMsg) -> (FormState, Option<Command>) {
    match msg {
        FormMsg::EditText(field, value) => {
            let target = match field {
                TextField::Nom => &mut state.form.nom,
                TextField::Prenom => &mut state.form.prenom,
                TextField::Email => &mut state.form.email,
                TextField::Telephone => &mut state.form.telephone,
                TextField::Message => &mut state.form.message,
            };
            *target = value;
        }
        FormMsg::SetCivilite(civilite) => state.form.civilite = civilite,
        FormMsg::SetMotif(motif) => state.form.motif_contact = motif,
        FormMsg::SetDraftDay(day) => state.draft.day = day,
        FormMsg::SetDraftHour(hour) => state.draft.hour = hour,
        FormMsg::SetDraftMinute(minute) => state.draft.minute = minute,
        FormMsg::AddSlot => match state.draft.complete() {
            Some(slot) => {
                state.form.disponibilites.push(slot);
                state.draft = DraftSlot::default();
                state.notice = None;
            }
            None => {
                state.notice = Some(Notice::Error(messages::INCOMPLETE_SLOT.to_string()));
            }
        },
        FormMsg::RemoveSlot(index) => {
            state.form.disponibilites = state
                .form
                .disponibilites
                .into_iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, slot)| slot)
                .collect();
        }
        FormMsg::Submit { today } => {
            if state.is_submitting {
                return (state, None);
            }
            state.notice = None;

            if !state.form.has_required_fields() {
                state.notice = Some(Notice::Error(messages::MISSING_REQUIRED_FIELDS.to_string()));
                return (state, None);
            }

            let payload = state.form.to_submission(today);
            state.is_submitting = true;
            return (state, Some(Command::Send(payload)));
        }
        FormMsg::SubmitCompleted(outcome) => {
            state.is_submitting = false;
            let notice = match outcome {
                Ok(response) if response.is_success() => {
                    state.form = ContactForm::default();
                    state.draft = DraftSlot::default();
                    Notice::Success(response.message)
                }
                Ok(response) => Notice::Error(response.message),
                Err(err) => Notice::Error(err.user_message().to_string()),
            };
            state.notice = Some(notice);
        }
    }

    (state, None)
}
