//! Port definitions (hexagonal architecture interfaces)
//!
//! Ports are the interfaces the sync layer depends on; their implementations
//! live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`IVideoApi`] - The remote video catalog (implemented over HTTP in `vidsync-api`)
//! - [`IClientStorage`] - Key/value client storage (SQLite and in-memory in `vidsync-cache`)

pub mod client_storage;
pub mod video_api;

pub use client_storage::{IClientStorage, KEY_IN_PROGRESS, KEY_USERNAME};
pub use video_api::{ApiError, IVideoApi};
