//! Everything under `/clients/{client_id}`.
//!
//! The client record itself is read-only here; the routes attach notes,
//! feedback, contracts and meetings to it and report on them.

pub mod router;
pub mod service;

pub use router::init_clients_router;
