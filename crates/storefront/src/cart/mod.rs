//! Persisted shopping cart.
//!
//! The cart is one ordered list of [`CartLine`]s stored as a single JSON blob
//! under the [`CART_LIST_KEY`] key. Every mutation is a full read-modify-write
//! of that blob: the store is the only source of truth, so a failed write
//! leaves the cart at its last successfully written state.
//!
//! # Concurrency
//!
//! Writes are last-write-wins. There is no compare-and-swap; two mutations
//! computed from the same stale snapshot will silently drop one of them. One
//! mutation path per session is assumed.
//!
//! # Line identity
//!
//! Lines merge on `(title, selectedSize, selectedColor)`. Index-based
//! operations re-read the list and fail with [`CartError::IndexOutOfRange`]
//! rather than touch a different line; the key-based variants avoid index
//! drift entirely.

mod summary;

pub use summary::{CartSummary, CheckoutPolicy};

use brandstore_core::{CartLine, LineKey};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::storage::{KeyValueStore, StorageError};

/// Storage key owning the serialized cart list.
pub const CART_LIST_KEY: &str = "CartList";

/// Confirmation shown after a line is added.
pub const ADDED_TO_CART_MESSAGE: &str = "Đã thêm vào giỏ hàng";

/// Errors raised by cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The key-value store could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The persisted cart blob is not a valid line list.
    #[error("Cart data is corrupt: {0}")]
    Decode(#[from] serde_json::Error),

    /// A caller-supplied position does not exist in the persisted list.
    #[error("Cart index {index} out of range (cart has {len} lines)")]
    IndexOutOfRange { index: usize, len: usize },

    /// No line has the given merge key.
    #[error("Cart line not found: {0}")]
    LineNotFound(LineKey),

    /// Lines must be added with a quantity of at least one.
    #[error("Cart line quantity must be at least 1")]
    InvalidQuantity,

    /// A line total or checkout figure does not fit in a `Decimal`.
    #[error("Cart amount overflowed")]
    AmountOverflow,
}

/// Receives user-visible confirmations (toasts, banners, log lines).
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Default notifier: emits the confirmation as a tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        info!(target: "brandstore_storefront::notify", "{message}");
    }
}

/// What `add_or_merge_line` did with the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended at `index`.
    Appended { index: usize },
    /// An existing line at `index` absorbed the item; `quantity` is its new total.
    Merged { index: usize, quantity: u32 },
}

/// Effect of a quantity change on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEffect {
    Updated { index: usize, quantity: u32 },
    Removed { index: usize },
}

/// Completion signal of a quantity change: the effect plus the list as
/// written, so presentation layers can refresh without another read.
#[derive(Debug, Clone, PartialEq)]
pub struct CartChange {
    pub effect: LineEffect,
    pub lines: Vec<CartLine>,
}

/// Owner of the persisted cart list.
///
/// No other component should write [`CART_LIST_KEY`].
pub struct CartStore<S> {
    store: S,
    notifier: Box<dyn Notifier + Send + Sync>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a cart over `store` that reports confirmations via tracing.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            notifier: Box::new(TracingNotifier),
        }
    }

    /// Replace the confirmation notifier.
    #[must_use]
    pub fn with_notifier(mut self, notifier: impl Notifier + Send + Sync + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Persisted lines in insertion order. A cart that was never written is
    /// an empty list, never an error.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if the store cannot be read and
    /// `CartError::Decode` if the blob is not a line list.
    pub fn list_lines(&self) -> Result<Vec<CartLine>, CartError> {
        let Some(blob) = self.store.get(CART_LIST_KEY)? else {
            return Ok(Vec::new());
        };
        let lines: Option<Vec<CartLine>> = serde_json::from_str(&blob)?;
        let lines = lines.unwrap_or_default();
        debug!(lines = lines.len(), "Loaded cart");
        Ok(lines)
    }

    fn write_lines(&self, lines: &[CartLine]) -> Result<(), CartError> {
        let blob = serde_json::to_string(lines)?;
        self.store.put(CART_LIST_KEY, &blob)?;
        debug!(lines = lines.len(), "Saved cart");
        Ok(())
    }

    /// Add `item` to the cart, merging into an existing line with the same
    /// `(title, size, color)`. A merge adds the item's quantity to the line;
    /// it never replaces it.
    ///
    /// # Errors
    ///
    /// Returns `CartError::InvalidQuantity` if the item's quantity is zero,
    /// or a storage/decode error. Nothing is written on error.
    #[instrument(skip(self, item), fields(line = %item.key(), quantity = item.quantity_in_cart))]
    pub fn add_or_merge_line(&self, item: CartLine) -> Result<AddOutcome, CartError> {
        if item.quantity_in_cart == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let mut lines = self.list_lines()?;
        let outcome = match lines.iter().position(|line| line.same_line(&item)) {
            Some(index) => {
                let quantity = lines.get_mut(index).map_or(0, |line| {
                    line.quantity_in_cart = line.quantity_in_cart.saturating_add(item.quantity_in_cart);
                    line.quantity_in_cart
                });
                AddOutcome::Merged { index, quantity }
            }
            None => {
                lines.push(item);
                AddOutcome::Appended {
                    index: lines.len() - 1,
                }
            }
        };

        self.write_lines(&lines)?;
        info!(?outcome, "Added line to cart");
        self.notifier.notify(ADDED_TO_CART_MESSAGE);
        Ok(outcome)
    }

    /// Increase the quantity of the line at `index` by one. There is no
    /// upper bound.
    ///
    /// # Errors
    ///
    /// Returns `CartError::IndexOutOfRange` if `index` does not exist in the
    /// freshly read list, or a storage/decode error.
    #[instrument(skip(self))]
    pub fn increment_line(&self, index: usize) -> Result<CartChange, CartError> {
        let lines = self.list_lines()?;
        check_index(index, lines.len())?;
        self.increment_at(lines, index)
    }

    /// Decrease the quantity of the line at `index` by one, removing the line
    /// entirely when its quantity is one.
    ///
    /// # Errors
    ///
    /// Returns `CartError::IndexOutOfRange` if `index` does not exist in the
    /// freshly read list, or a storage/decode error.
    #[instrument(skip(self))]
    pub fn decrement_or_remove(&self, index: usize) -> Result<CartChange, CartError> {
        let lines = self.list_lines()?;
        check_index(index, lines.len())?;
        self.decrement_at(lines, index)
    }

    /// Increase the quantity of the line identified by `key` by one.
    ///
    /// # Errors
    ///
    /// Returns `CartError::LineNotFound` if no line has that key, or a
    /// storage/decode error.
    #[instrument(skip(self), fields(line = %key))]
    pub fn increment_by_key(&self, key: &LineKey) -> Result<CartChange, CartError> {
        let lines = self.list_lines()?;
        let index = find_line(&lines, key)?;
        self.increment_at(lines, index)
    }

    /// Decrease the quantity of the line identified by `key` by one,
    /// removing it when its quantity is one.
    ///
    /// # Errors
    ///
    /// Returns `CartError::LineNotFound` if no line has that key, or a
    /// storage/decode error.
    #[instrument(skip(self), fields(line = %key))]
    pub fn decrement_by_key(&self, key: &LineKey) -> Result<CartChange, CartError> {
        let lines = self.list_lines()?;
        let index = find_line(&lines, key)?;
        self.decrement_at(lines, index)
    }

    fn increment_at(&self, mut lines: Vec<CartLine>, index: usize) -> Result<CartChange, CartError> {
        let len = lines.len();
        let line = lines
            .get_mut(index)
            .ok_or(CartError::IndexOutOfRange { index, len })?;
        line.quantity_in_cart = line.quantity_in_cart.saturating_add(1);
        let effect = LineEffect::Updated {
            index,
            quantity: line.quantity_in_cart,
        };

        self.write_lines(&lines)?;
        info!(?effect, "Incremented cart line");
        Ok(CartChange { effect, lines })
    }

    fn decrement_at(&self, mut lines: Vec<CartLine>, index: usize) -> Result<CartChange, CartError> {
        let len = lines.len();
        let line = lines
            .get_mut(index)
            .ok_or(CartError::IndexOutOfRange { index, len })?;

        let effect = if line.quantity_in_cart <= 1 {
            lines.remove(index);
            LineEffect::Removed { index }
        } else {
            line.quantity_in_cart -= 1;
            LineEffect::Updated {
                index,
                quantity: line.quantity_in_cart,
            }
        };

        self.write_lines(&lines)?;
        info!(?effect, "Decremented cart line");
        Ok(CartChange { effect, lines })
    }

    /// Sum of `price × quantity` over every line, read from the store rather
    /// than any cached copy.
    ///
    /// # Errors
    ///
    /// Returns a storage/decode error if the cart cannot be read, or
    /// `CartError::AmountOverflow` if the sum does not fit in a `Decimal`.
    pub fn compute_subtotal(&self) -> Result<Decimal, CartError> {
        self.list_lines()?
            .iter()
            .try_fold(Decimal::ZERO, |acc, line| {
                line.line_total().and_then(|total| acc.checked_add(total))
            })
            .ok_or(CartError::AmountOverflow)
    }

    /// Total number of items across all lines.
    ///
    /// # Errors
    ///
    /// Returns a storage/decode error if the cart cannot be read.
    pub fn item_count(&self) -> Result<u32, CartError> {
        Ok(self
            .list_lines()?
            .iter()
            .fold(0_u32, |acc, line| acc.saturating_add(line.quantity_in_cart)))
    }

    /// Checkout figures for the current cart.
    ///
    /// # Errors
    ///
    /// Returns a storage/decode error if the cart cannot be read, or
    /// `CartError::AmountOverflow` if any figure does not fit in a `Decimal`.
    pub fn summary(&self, policy: &CheckoutPolicy) -> Result<CartSummary, CartError> {
        CartSummary::from_subtotal(self.compute_subtotal()?, policy).ok_or(CartError::AmountOverflow)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if the store cannot be written.
    #[instrument(skip(self))]
    pub fn clear(&self) -> Result<(), CartError> {
        self.store.remove(CART_LIST_KEY)?;
        info!("Cleared cart");
        Ok(())
    }
}

fn check_index(index: usize, len: usize) -> Result<(), CartError> {
    if index >= len {
        warn!(index, len, "Stale cart index");
        return Err(CartError::IndexOutOfRange { index, len });
    }
    Ok(())
}

fn find_line(lines: &[CartLine], key: &LineKey) -> Result<usize, CartError> {
    lines
        .iter()
        .position(|line| key.matches(line))
        .ok_or_else(|| CartError::LineNotFound(key.clone()))
}
