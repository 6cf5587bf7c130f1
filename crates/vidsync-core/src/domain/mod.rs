//! Domain entities and business rules
//!
//! This module contains the core domain types for VidSync:
//! - Newtypes for validated identifiers
//! - Video and comment records in their internal shape
//! - Field sets for write operations
//! - Display ordering rules
//! - Domain-specific error types

pub mod comment;
pub mod errors;
pub mod newtypes;
pub mod ordering;
pub mod video;

// Re-export commonly used types
pub use comment::{Comment, NewComment};
pub use errors::DomainError;
pub use newtypes::*;
pub use video::{NewVideo, Video, VideoPatch};
