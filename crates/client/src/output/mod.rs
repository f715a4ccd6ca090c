//! Rendering of registrations for the CLI.
//!
//! JSON output is one compact document per command: the registration, or the
//! bare array for a listing. Pretty output is delegated to [`pretty`].

pub mod pretty;

use enjaz_core::Registration;

use crate::access::Listing;
use crate::cli::OutputFormat;

/// Render one registration in the requested format.
pub fn render_registration(registration: &Registration, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(registration).unwrap_or_default(),
        OutputFormat::Pretty => pretty::format_registration(registration),
    }
}

/// Render a listing in the requested format.
///
/// The data source only shows up in pretty output; JSON carries the array.
pub fn render_listing(listing: &Listing, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(&listing.registrations).unwrap_or_default(),
        OutputFormat::Pretty => pretty::format_listing(listing),
    }
}
