//! Text produced for pasting into an email: the quote summary and the
//! subject line.

use crate::{models::FormState, store::QuoteStore};

const NO_REFERENCE: &str = "SIN REFERENCIA";
const NO_CLIENT: &str = "SIN CLIENTE";

/// Rewrites `YYYY-MM-DD` as `DD/MM/YYYY`.
///
/// This is a plain split on `-`; no calendar validation happens. Input that
/// does not have exactly three parts is returned unchanged.
///
/// # Examples
///
/// ```
/// use soat_core::formatting::format_date;
///
/// assert_eq!(format_date("2024-03-07"), "07/03/2024");
/// ```
pub fn format_date(iso: &str) -> String {
    let parts: Vec<&str> = iso.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{day}/{month}/{year}"),
        _ => iso.to_string(),
    }
}

/// One line per quote, in display order.
pub fn format_quote_lines(store: &QuoteStore) -> String {
    store
        .displayed()
        .iter()
        .map(|q| q.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the multi-line summary copied by the "copy quotes" action.
///
/// Client and nro lines are only emitted when non-empty; every other line is
/// always present, so empty fields show up as blank lines.
pub fn format_summary(
    form: &FormState,
    store: &QuoteStore,
) -> String {
    let mut text = String::new();

    if !form.client.is_empty() {
        text.push_str(&form.client);
        text.push('\n');
    }
    if !form.nro.is_empty() {
        text.push_str(&form.nro);
        text.push_str("\n\n");
    }

    text.push_str(&format!(
        "INICIO {}\n\n{}\n{}\n\n{}\n{}",
        format_date(&form.start_date),
        form.vehicle_class,
        format_quote_lines(store),
        form.usage,
        form.circulation,
    ));
    text
}

/// `COTIZACION SOAT <usage> // <reference> // <client>`, with placeholders
/// for an empty reference or client. Usage is printed as-is.
pub fn format_subject(form: &FormState) -> String {
    let reference = if form.reference.is_empty() {
        NO_REFERENCE
    } else {
        form.reference.as_str()
    };
    let client = if form.client.is_empty() {
        NO_CLIENT
    } else {
        form.client.as_str()
    };

    format!("COTIZACION SOAT {} // {} // {}", form.usage, reference, client)
}
