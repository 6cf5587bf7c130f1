//! VidSync Core - Domain types and ports for the catalog client
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `Video`, `Comment`, and the field sets used to create or edit them
//! - **Ordering rules** - newest-first lists, oldest-first comments, in-progress-first display
//! - **Port definitions** - Traits for adapters: `IVideoApi`, `IClientStorage`
//! - **Configuration** - YAML-backed settings shared by every binary
//!
//! # Architecture
//!
//! The domain module contains pure data and rules with no I/O.
//! Ports define trait interfaces that adapter crates implement
//! (`vidsync-api` for the remote catalog, `vidsync-cache` for client storage).

pub mod config;
pub mod domain;
pub mod ports;
