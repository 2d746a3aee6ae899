//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod identity;
mod repository;

pub use auth::{AuthError, TokenClaims, TokenService};
pub use identity::{Clock, IdentitySource};
pub use repository::{BaseRepository, PostRepository};
