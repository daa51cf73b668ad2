//! Authentication and authorization for the client routes.
//!
//! - [`auth`]: the `AuthUser` extractor and bearer-token parsing
//! - [`role`]: `require_auth` / `require_admin` route layers
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. The route layer verifies the token and, for admin routes, the role
//! 3. The resolved [`auth::AuthUser`] is stored in request extensions
//! 4. Handlers take `AuthUser` as an argument to read it back
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use crate::middleware::role::require_admin;
//!
//! let admin_routes = Router::new()
//!     .route("/{client_id}/report", get(get_report))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
//! ```

pub mod auth;
pub mod role;
