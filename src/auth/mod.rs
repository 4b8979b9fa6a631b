//! Authentication core for Academy CMS.
//!
//! Two components composed at the edge of every request:
//! - Credential Issuer: validates identity + secret, mints signed tokens
//! - Edge Authorization Gate: classifies paths and verifies attached tokens
//!
//! Token verification is a pure cryptographic check; no store is consulted
//! after issuance.

pub mod cookie;
mod gate;
mod issuer;
mod middleware;
mod token;

pub use gate::*;
pub use issuer::*;
pub use middleware::*;
pub use token::*;
