pub mod auth;
pub mod clients;
pub mod contracts;
pub mod feedback;
pub mod meetings;
pub mod notes;
pub mod reports;
