//! Shared helpers for the request handlers.
//!
//! - [`auth_helpers`]: ownership checks between the caller and a client record

pub mod auth_helpers;
