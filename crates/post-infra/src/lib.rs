//! # Post Infrastructure
//!
//! Concrete implementations of the ports defined in `post-core`.
//! This crate contains the storage backends, the system clock, and the
//! bearer-token identity service.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod auth;
pub mod clock;
pub mod database;

pub use auth::{JwtConfig, JwtTokenService};
pub use clock::SystemClock;
pub use database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
