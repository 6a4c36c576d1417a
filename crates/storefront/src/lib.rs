//! Barco Storefront - client-side cart subsystem.
//!
//! This crate provides the shopping cart of the furniture storefront as a
//! library: the cart store with its derived totals, write-through persistence
//! to a durable slot, the add-to-cart confirmation state, and the display data
//! the storefront surfaces render from it.
//!
//! # Architecture
//!
//! - [`cart`] - cart store, persistence adapter and notification port
//! - [`storage`] - synchronous key-value slot stores (file and in-memory)
//! - [`catalog`] - product records and their conversion into cart lines
//! - [`view`] - formatted cart and confirmation display data
//! - [`state`] - shared cart handle passed to consumers
//! - [`config`] - environment configuration
//!
//! # Example
//!
//! ```rust
//! use barco_core::Quantity;
//! use barco_storefront::cart::{CartLineItem, CartPersistence, CartStore};
//! use barco_storefront::storage::MemoryStore;
//! use rust_decimal::Decimal;
//!
//! let mut cart = CartStore::open(CartPersistence::new(MemoryStore::new()));
//! cart.add_to_cart(CartLineItem::new(
//!     "Oak Dresser",
//!     "Oak Dresser",
//!     Decimal::new(12_500, 0),
//!     "/images/dresser.jpg",
//!     Quantity::ONE,
//! ));
//! assert_eq!(cart.total_items(), 1);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;
pub mod view;
