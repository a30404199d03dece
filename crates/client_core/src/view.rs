//! Pure projection of controller state into a renderable description.

use chrono::NaiveDate;
use shared::{
    dates::{earliest_end, earliest_start},
    domain::{Booking, BookingId},
};

use crate::state::{BookingState, Draft};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub min_start_date: NaiveDate,
    pub min_end_date: NaiveDate,
}

impl FormView {
    fn from_draft(draft: &Draft, today: NaiveDate) -> Self {
        Self {
            name: draft.name.clone(),
            start_date: draft.start_date,
            end_date: draft.end_date,
            min_start_date: earliest_start(today),
            min_end_date: earliest_end(draft.start_date, today),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Delete(BookingId),
    BeginEdit(BookingId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRow {
    pub booking: Booking,
    pub actions: [RowAction; 2],
}

impl BookingRow {
    pub fn label(&self) -> String {
        format!(
            "{}: {} to {}",
            self.booking.name, self.booking.start_date, self.booking.end_date
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub create_form: FormView,
    pub bookings: Vec<BookingRow>,
    /// Present only while a booking is being edited.
    pub edit_form: Option<FormView>,
    pub error_banner: Option<String>,
}

pub fn project(state: &BookingState, today: NaiveDate) -> View {
    // Both forms are bound to the same draft.
    let form = FormView::from_draft(&state.draft, today);
    let bookings = state
        .bookings
        .iter()
        .map(|booking| BookingRow {
            booking: booking.clone(),
            actions: [
                RowAction::Delete(booking.id.clone()),
                RowAction::BeginEdit(booking.id.clone()),
            ],
        })
        .collect();

    View {
        edit_form: state.is_editing().then(|| form.clone()),
        create_form: form,
        bookings,
        error_banner: state
            .error_message
            .as_ref()
            .filter(|message| !message.is_empty())
            .cloned(),
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
