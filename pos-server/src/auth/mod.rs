//! Authentication and authorization
//!
//! - [`JwtService`] - token generation and validation
//! - [`CurrentUser`] - per-request user context
//! - [`require_auth`] - router-level authentication middleware
//! - [`require_admin`] - administrator role middleware
//! - [`password`] - argon2 hashing helpers

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};
