//! # Pearl Decor Core
//!
//! Core types, errors, and utilities for the Pearl Decor API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: Password hashing and verification (bcrypt)
//! - [`roles`]: The two account roles, `client` and `admin`
//!
//! # Example
//!
//! ```ignore
//! use pearldecor_core::errors::AppError;
//! use pearldecor_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Client not found"));
//!
//! let hash = hash_password("secure_password")?;
//! assert!(verify_password("secure_password", &hash)?);
//! ```

pub mod errors;
pub mod password;
pub mod roles;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{Credentials, hash_password, verify_password};
pub use roles::UserRole;
