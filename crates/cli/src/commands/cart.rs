//! Cart management commands.
//!
//! Positions passed to `plus` and `minus` refer to the list printed by
//! `cart list`. The cart re-reads its stored list before every change and
//! rejects a position that no longer exists.

use std::io::Write;

use brandstore_core::{Color, Price, Size};
use brandstore_storefront::cart::{AddOutcome, CartChange, CartError, LineEffect};
use brandstore_storefront::{AppError, Result};
use tracing::info;

use super::Context;

/// Add a catalog product with the chosen size and color.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for an unknown size or color,
/// `AppError::NotFound` if no product has that title, or a cart error.
pub fn add(
    ctx: &Context,
    title: &str,
    size: &str,
    color: &str,
    quantity: u32,
) -> Result<()> {
    let size: Size = size
        .parse::<Size>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let color: Color = color
        .parse::<Color>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let catalog = ctx.catalog()?;
    let product = catalog
        .find_by_title(title)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {title:?}")))?;

    let line = product.into_cart_line(size.label(), color.label(), quantity);
    match ctx.cart.add_or_merge_line(line)? {
        AddOutcome::Appended { index } => info!(index, "Added new cart line"),
        AddOutcome::Merged { index, quantity } => {
            info!(index, quantity, "Merged into existing cart line");
        }
    }
    Ok(())
}

/// Print every cart line with its position.
///
/// # Errors
///
/// Returns a cart error if the cart cannot be read or a line total
/// overflows, or an output error.
pub fn list(ctx: &Context) -> Result<()> {
    let lines = ctx.cart.list_lines()?;
    let mut out = std::io::stdout().lock();
    if lines.is_empty() {
        writeln!(out, "Cart is empty")?;
        return Ok(());
    }
    for (index, line) in lines.iter().enumerate() {
        let total = line.line_total().ok_or(CartError::AmountOverflow)?;
        writeln!(
            out,
            "{index:>3}  {:<40} {:<3} {:<6} x{:<4} {:>14}",
            line.title,
            line.selected_size,
            line.selected_color,
            line.quantity_in_cart,
            Price::vnd(total).display()
        )?;
    }
    Ok(())
}

/// Increase the quantity of the line at `index`.
///
/// # Errors
///
/// Returns a cart error if `index` is stale or the store fails.
pub fn plus(ctx: &Context, index: usize) -> Result<()> {
    let change = ctx.cart.increment_line(index)?;
    report(&change);
    Ok(())
}

/// Decrease the quantity of the line at `index`, removing it at zero.
///
/// # Errors
///
/// Returns a cart error if `index` is stale or the store fails.
pub fn minus(ctx: &Context, index: usize) -> Result<()> {
    let change = ctx.cart.decrement_or_remove(index)?;
    report(&change);
    Ok(())
}

fn report(change: &CartChange) {
    match change.effect {
        LineEffect::Updated { index, quantity } => info!(index, quantity, "Updated cart line"),
        LineEffect::Removed { index } => info!(index, "Removed cart line"),
    }
    info!(lines = change.lines.len(), "Cart saved");
}

/// Print subtotal, tax, delivery and total.
///
/// # Errors
///
/// Returns a cart error if the cart cannot be read, or an output error.
pub fn summary(ctx: &Context) -> Result<()> {
    let summary = ctx.cart.summary(&ctx.config.checkout)?;
    let mut out = std::io::stdout().lock();
    for (label, value) in summary.display_rows() {
        writeln!(out, "{label:<10} {value:>16}")?;
    }
    Ok(())
}

/// Remove every line.
///
/// # Errors
///
/// Returns a cart error if the store cannot be written.
pub fn clear(ctx: &Context) -> Result<()> {
    ctx.cart.clear()?;
    Ok(())
}
