//! Brandstore Core - Shared types library.
//!
//! This crate provides the types shared by every Brandstore component:
//! - `storefront` - Cart persistence, catalog search and filtering
//! - `cli` - Command-line browsing and cart management
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no storage
//! access, no catalog clients. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product records, cart lines, prices, price ranges and variant options

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
