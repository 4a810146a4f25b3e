//! Service layer for business logic
//!
//! Shared by every interface that shortens, inspects or follows links.

pub mod resolution_service;

pub use resolution_service::{CodePolicy, ResolutionService};
