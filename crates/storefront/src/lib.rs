//! Teahouse Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused by the CLI.
//!
//! # Modules
//!
//! - [`cart`] - The cart store: owns the cart, persists it, drives rendering
//! - [`storage`] - Key-value persistence backends
//! - [`render`] - HTML and text renderers for cart state
//! - [`routes`] - Axum handlers serving the page and HTMX fragments
//! - [`menu`] - Catalog shown on the home page

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
mod filters;
pub mod menu;
pub mod render;
pub mod routes;
pub mod state;
pub mod storage;
