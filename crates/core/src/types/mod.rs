//! Core types for Barco.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod quantity;

pub use id::{ProductId, Slug};
pub use price::{CurrencyCode, CurrencyCodeError, Price};
pub use quantity::{Quantity, QuantityError};
