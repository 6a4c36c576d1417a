//! Barco Core - Shared types library.
//!
//! This crate provides common types used across all Barco components:
//! - `storefront` - Cart store, persistence and view models
//! - `cli` - Command-line access to the persisted cart
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, slugs, quantities and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
