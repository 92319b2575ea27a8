use axum::{Router, routing::post};
use std::sync::Arc;

use crate::{ApiState, handlers};

/// Path the contact form posts to.
pub const CONTACT_PATH: &str = "/api/contact";

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(CONTACT_PATH, post(handlers::contact::submit_contact))
}
