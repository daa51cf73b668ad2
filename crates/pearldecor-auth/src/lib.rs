//! # Pearl Decor Auth
//!
//! Identity tokens for the Pearl Decor API.
//!
//! - [`claims`]: the identity embedded in a token (user id and role)
//! - [`jwt`]: token issuing and verification
//!
//! Tokens are HS256 JWTs signed with the server-held `JWT_SECRET`. They are
//! verified without any server-side session lookup.
//!
//! # Example
//!
//! ```ignore
//! use pearldecor_auth::{create_access_token, verify_token};
//! use pearldecor_config::JwtConfig;
//! use pearldecor_core::UserRole;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(42, UserRole::Admin, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.user_id()?, 42);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
