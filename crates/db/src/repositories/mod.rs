pub mod contact;
pub mod disponibilite;
pub mod submission;
