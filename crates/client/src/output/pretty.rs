//! Pretty output formatting.

use enjaz_core::Registration;

use crate::access::{DataSource, Listing};

/// Format a registration for display.
pub fn format_registration(registration: &Registration) -> String {
    format!(
        "{} ({})\n  ID: {}\n  Phone: {}\n  Registered: {}",
        registration.student_name,
        registration.student_id,
        registration.id,
        registration.phone_number,
        registration.registered_at.format("%Y-%m-%d %H:%M UTC"),
    )
}

/// Format a listing for display.
pub fn format_listing(listing: &Listing) -> String {
    let mut output = String::new();
    if listing.source == DataSource::Fallback {
        output.push_str("(offline: showing locally saved registrations)\n");
    }

    if listing.registrations.is_empty() {
        output.push_str("No registrations found.");
        return output;
    }

    output.push_str(&format!("REGISTRATIONS ({})\n", listing.registrations.len()));
    output.push_str(&"-".repeat(40));
    for registration in &listing.registrations {
        output.push_str(&format!("\n{}", format_registration(registration)));
        output.push('\n');
    }
    output
}
