//! # Submission pipeline
//!
//! The endpoint turns a request body into storable rows in three pure steps:
//!
//! 1. [`parse_submission`] rejects bodies that carry no usable data;
//! 2. [`sanitize_field`] cleans every scalar field;
//! 3. [`validate_submission`] checks required fields and email syntax.
//!
//! Nothing here touches storage. A submission that fails any step never
//! reaches the repository.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::{
    errors::{ContactError, ContactResult},
    messages,
    models::contact::{ContactSubmission, NewContact, ValidSubmission},
};

static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>?").expect("valid tag regex"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$"#,
    )
    .expect("valid email regex")
});

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

/// Decodes a request body into a [`ContactSubmission`].
///
/// An empty body, invalid JSON, anything other than a JSON object, or an
/// empty object count as "no data". Inside an object, field types are
/// coerced and never rejected.
pub fn parse_submission(body: &[u8]) -> ContactResult<ContactSubmission> {
    let no_data = || ContactError::MalformedBody(messages::NO_DATA_RECEIVED.to_string());

    let value: Value = serde_json::from_slice(body).map_err(|_| no_data())?;
    match &value {
        Value::Object(fields) if !fields.is_empty() => {}
        _ => return Err(no_data()),
    }

    serde_json::from_value(value).map_err(|_| no_data())
}

/// Trims the value and strips markup and control characters.
///
/// Line breaks and tabs survive so multi-line messages keep their shape.
pub fn sanitize_field(raw: &str) -> String {
    let without_tags = HTML_TAG.replace_all(raw, "");
    without_tags
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t'))
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN {
        return false;
    }
    match email.split_once('@') {
        Some((local, _)) if local.len() <= MAX_LOCAL_PART_LEN => EMAIL.is_match(email),
        _ => false,
    }
}

/// Sanitizes every field, then checks the required ones.
///
/// Civility, last name, first name and contact reason must be non-empty and
/// the email must be syntactically valid. Phone and message are optional.
/// Slot strings are only filtered for emptiness; their format is left for
/// storage to judge.
pub fn validate_submission(submission: ContactSubmission) -> ContactResult<ValidSubmission> {
    let contact = NewContact {
        civilite: sanitize_field(&submission.civilite),
        nom: sanitize_field(&submission.nom),
        prenom: sanitize_field(&submission.prenom),
        email: submission.email.trim().to_string(),
        telephone: sanitize_field(&submission.telephone),
        message: sanitize_field(&submission.message),
        motif_contact: sanitize_field(&submission.motif_contact),
    };

    let required = [
        &contact.civilite,
        &contact.nom,
        &contact.prenom,
        &contact.motif_contact,
    ];
    if required.iter().any(|field| field.is_empty()) || !is_valid_email(&contact.email) {
        return Err(ContactError::Validation(
            messages::INVALID_REQUIRED_FIELDS.to_string(),
        ));
    }

    let disponibilites = submission
        .disponibilites
        .into_iter()
        .filter(|slot| !slot.is_empty())
        .collect();

    Ok(ValidSubmission {
        contact,
        disponibilites,
    })
}
