//! Plain-text rendering of the projected booking view.

use std::fmt::Write as _;

use chrono::NaiveDate;
use client_core::{FormView, View};

fn date_or_blank(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
}

fn render_form(out: &mut String, title: &str, form: &FormView) {
    let _ = writeln!(out, "== {title} ==");
    let _ = writeln!(out, "Name:       {}", form.name);
    let _ = writeln!(
        out,
        "Start Date: {} (earliest {})",
        date_or_blank(form.start_date),
        form.min_start_date
    );
    let _ = writeln!(
        out,
        "End Date:   {} (earliest {})",
        date_or_blank(form.end_date),
        form.min_end_date
    );
}

pub fn render(view: &View) -> String {
    let mut out = String::new();
    render_form(&mut out, "Create Booking", &view.create_form);

    out.push_str("== All Bookings ==\n");
    if view.bookings.is_empty() {
        out.push_str("(none)\n");
    }
    for (index, row) in view.bookings.iter().enumerate() {
        let _ = writeln!(out, "#{} [{}] {}", index + 1, row.booking.id, row.label());
    }

    if let Some(edit_form) = &view.edit_form {
        render_form(&mut out, "Update Booking", edit_form);
    }
    if let Some(banner) = &view.error_banner {
        let _ = writeln!(out, "! {banner}");
    }
    out
}
