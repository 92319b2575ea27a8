pub mod contact;
pub mod response;
pub mod slot;
