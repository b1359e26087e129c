//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`auth::OptionalAuthUser`] -- Same, but anonymous callers are allowed.
//! - [`rbac::RequireAdmin`] -- Requires an admin, re-checked against the database.

pub mod auth;
pub mod rbac;
