use chrono::NaiveDate;
use shared::domain::{Booking, BookingId};

/// In-progress form values, not yet persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Draft {
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            name: booking.name.clone(),
            start_date: Some(booking.start_date),
            end_date: Some(booking.end_date),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.start_date.is_none() && self.end_date.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Create,
    Edit(BookingId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingState {
    /// Ordered as the service returned them.
    pub bookings: Vec<Booking>,
    pub draft: Draft,
    pub mode: EditMode,
    pub error_message: Option<String>,
    /// Ticket of the newest list response applied so far.
    pub list_ticket: u64,
}

impl BookingState {
    pub fn selected_id(&self) -> Option<&BookingId> {
        match &self.mode {
            EditMode::Create => None,
            EditMode::Edit(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Edit(_))
    }

    pub fn find(&self, id: &BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|booking| &booking.id == id)
    }
}
