//! Cart summary rendering.

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::{Columns, Rows}},
};
use thiserror::Error;

use crate::cart::Cart;

/// Errors that can occur when rendering a cart summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// IO error
    #[error("IO error")]
    Io,
}

/// Write the cart as a table followed by count and total lines.
///
/// The output is a pure function of the cart state.
///
/// # Errors
///
/// Returns a [`SummaryError::Io`] if the output cannot be written.
pub fn write_summary(out: &mut impl io::Write, cart: &Cart) -> Result<(), SummaryError> {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Unit Price", "Qty", "Line Total"]);

    for line in cart {
        builder.push_record([
            line.name().to_string(),
            format_amount(line.unit_price()),
            line.quantity().to_string(),
            format_amount(line.line_total()),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Alignment::center());
    table.modify(Columns::new(1..), Alignment::right());

    writeln!(out, "{table}").map_err(|_err| SummaryError::Io)?;
    writeln!(out, " Items: {}", cart.total_count()).map_err(|_err| SummaryError::Io)?;
    writeln!(out, " Total: {}", format_amount(cart.total())).map_err(|_err| SummaryError::Io)
}

/// Render the cart summary to a string.
///
/// # Errors
///
/// Returns a [`SummaryError::Io`] if rendering fails.
pub fn render_summary(cart: &Cart) -> Result<String, SummaryError> {
    let mut out = Vec::new();

    write_summary(&mut out, cart)?;

    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn format_amount(amount: Decimal) -> String {
    format!("{amount:.2}")
}
