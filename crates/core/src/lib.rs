//! Teahouse Core - Shared cart types.
//!
//! This crate provides the domain types used across all Teahouse components:
//! - `storefront` - The shop page and its cart endpoints
//! - `cli` - Command-line access to the same profile store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! rendering. Persisting and displaying a [`Cart`] is the job of the
//! storefront crate.
//!
//! # Modules
//!
//! - [`types`] - Item identifiers, prices, line items and the cart itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
