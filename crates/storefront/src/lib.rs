//! Brandstore Storefront library.
//!
//! The two pieces of the storefront with real business rules live here:
//!
//! - [`cart`] - the persisted shopping cart (merge, quantity and removal rules)
//! - [`search`] - accent-insensitive product search composed with price filters
//!
//! Both depend only on the product record shape from `brandstore-core` and,
//! for the cart, on a [`storage::KeyValueStore`]. The [`catalog`] module holds
//! the catalog collaborator that screens feed into search.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod storage;

pub use cart::{AddOutcome, CartChange, CartStore, CartSummary, CheckoutPolicy};
pub use error::{AppError, Result};
pub use search::{ProductFilter, normalize, search};
