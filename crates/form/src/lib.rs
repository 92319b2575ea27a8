//! # Agence Form
//!
//! Client side of the contact form: the form state and its reducer, the
//! draft slot selector, and the transport that posts a submission to the
//! contact endpoint.
//!
//! ```no_run
//! use agence_core::models::contact::{Civilite, MotifContact};
//! use agence_form::{
//!     FormController, FormConfig, HttpTransport,
//!     state::{FormMsg, TextField},
//! };
//!
//! # async fn run() {
//! let config = FormConfig::from_env();
//! let mut form = FormController::new(HttpTransport::new(config.endpoint_url));
//! form.dispatch(FormMsg::SetCivilite(Some(Civilite::M))).await;
//! form.dispatch(FormMsg::EditText(TextField::Nom, "Dupont".into())).await;
//! form.dispatch(FormMsg::EditText(TextField::Prenom, "Jean".into())).await;
//! form.dispatch(FormMsg::EditText(TextField::Email, "jean@x.com".into())).await;
//! form.dispatch(FormMsg::SetMotif(Some(MotifContact::EtreRappele))).await;
//! form.dispatch(FormMsg::AddSlot).await;
//! form.submit().await;
//! println!("{:?}", form.state().notice);
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod state;
pub mod transport;

pub use config::FormConfig;
pub use controller::FormController;
pub use transport::{ContactTransport, HttpTransport, SubmitError};
