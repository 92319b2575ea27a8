//! # Agence Core
//!
//! Domain types shared by the contact endpoint and the contact form:
//! the submitted contact, visit availability slots and their projection
//! onto calendar timestamps, the sanitize/validate pipeline and the error
//! taxonomy.

pub mod errors;
pub mod messages;
pub mod models;
pub mod validation;
