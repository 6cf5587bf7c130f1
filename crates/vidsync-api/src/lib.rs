//! VidSync API - HTTP client for the video catalog
//!
//! Provides an async client for the catalog's JSON endpoints and an
//! implementation of the [`IVideoApi`](vidsync_core::ports::IVideoApi) port.
//!
//! ## Modules
//!
//! - [`wire`] - Wire Mapper between the snake_case payloads and domain types
//! - [`client`] - Low-level HTTP client, one method per endpoint
//! - [`provider`] - `IVideoApi` implementation built on the client

pub mod client;
pub mod provider;
pub mod wire;

pub use client::VideoApiClient;
pub use provider::HttpVideoProvider;
