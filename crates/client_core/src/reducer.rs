//! Reducer-style state transitions for the booking form and edit mode.

use chrono::NaiveDate;
use shared::domain::Booking;

use crate::{
    error::{ValidationError, CREATE_FAILED, UPDATE_FAILED},
    state::{BookingState, Draft, EditMode},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingEvent {
    NameEdited(String),
    StartDateEdited(Option<NaiveDate>),
    EndDateEdited(Option<NaiveDate>),
    /// Enter edit mode on a listed booking, or re-target an edit in progress.
    EditRequested(Booking),
    EditCancelled,
    SubmissionRejected(ValidationError),
    ListLoaded {
        ticket: u64,
        bookings: Vec<Booking>,
    },
    CreateSucceeded,
    CreateFailed,
    UpdateSucceeded,
    UpdateFailed,
}

pub fn reduce(mut state: BookingState, event: BookingEvent) -> BookingState {
    match event {
        BookingEvent::NameEdited(name) => state.draft.name = name,
        BookingEvent::StartDateEdited(date) => state.draft.start_date = date,
        BookingEvent::EndDateEdited(date) => state.draft.end_date = date,
        BookingEvent::EditRequested(booking) => {
            state.draft = Draft::from_booking(&booking);
            state.mode = EditMode::Edit(booking.id);
        }
        BookingEvent::EditCancelled => state.mode = EditMode::Create,
        BookingEvent::SubmissionRejected(err) => state.error_message = Some(err.to_string()),
        BookingEvent::ListLoaded { ticket, bookings } => {
            // Older refreshes that resolve late must not overwrite newer ones.
            if ticket > state.list_ticket {
                state.list_ticket = ticket;
                state.bookings = bookings;
            }
        }
        BookingEvent::CreateSucceeded => {
            state.draft = Draft::default();
            state.error_message = None;
        }
        BookingEvent::CreateFailed => state.error_message = Some(CREATE_FAILED.to_string()),
        BookingEvent::UpdateSucceeded => {
            state.error_message = None;
            state.mode = EditMode::Create;
        }
        BookingEvent::UpdateFailed => {
            // The edit target is dropped even though nothing was saved.
            state.error_message = Some(UPDATE_FAILED.to_string());
            state.mode = EditMode::Create;
        }
    }
    state
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
