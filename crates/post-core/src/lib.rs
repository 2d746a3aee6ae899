//! # Post Core
//!
//! The domain layer of the post store.
//! This crate contains the post entities, the ports the store depends on,
//! and the [`PostService`] holding every validation and authorization rule.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::PostService;
