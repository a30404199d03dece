use shared::domain::BookingId;

use super::*;
use crate::state::EditMode;

fn date(raw: &str) -> NaiveDate {
    raw.parse().expect("date")
}

fn state_with_two_bookings() -> BookingState {
    BookingState {
        bookings: vec![
            Booking {
                id: BookingId::new("b-1"),
                name: "Bob".to_string(),
                start_date: date("2024-03-01"),
                end_date: date("2024-03-04"),
            },
            Booking {
                id: BookingId::new("b-2"),
                name: "Carol".to_string(),
                start_date: date("2024-04-10"),
                end_date: date("2024-04-11"),
            },
        ],
        ..BookingState::default()
    }
}

#[test]
fn create_mode_shows_form_and_rows_only() {
    let today = date("2024-02-01");
    let view = project(&state_with_two_bookings(), today);

    assert_eq!(view.create_form.name, "");
    assert_eq!(view.create_form.min_start_date, today);
    assert_eq!(view.create_form.min_end_date, today);
    assert!(view.edit_form.is_none());
    assert!(view.error_banner.is_none());
    assert_eq!(view.bookings.len(), 2);
    assert_eq!(view.bookings[1].label(), "Carol: 2024-04-10 to 2024-04-11");
    assert_eq!(
        view.bookings[0].actions,
        [
            RowAction::Delete(BookingId::new("b-1")),
            RowAction::BeginEdit(BookingId::new("b-1")),
        ]
    );
}

#[test]
fn edit_mode_adds_edit_form_bound_to_draft() {
    let mut state = state_with_two_bookings();
    state.draft = Draft::from_booking(&state.bookings[0]);
    state.mode = EditMode::Edit(BookingId::new("b-1"));

    let view = project(&state, date("2024-02-01"));

    let edit = view.edit_form.expect("edit form");
    assert_eq!(edit.name, "Bob");
    assert_eq!(edit.start_date, Some(date("2024-03-01")));
    assert_eq!(edit.min_end_date, date("2024-03-02"));
    assert_eq!(view.create_form, edit);
}

#[test]
fn banner_follows_error_message() {
    let mut state = BookingState::default();
    state.error_message = Some("Failed to create booking.".to_string());
    assert_eq!(
        project(&state, date("2024-02-01")).error_banner.as_deref(),
        Some("Failed to create booking.")
    );

    state.error_message = Some(String::new());
    assert!(project(&state, date("2024-02-01")).error_banner.is_none());
}

#[test]
fn projection_leaves_state_untouched() {
    let state = state_with_two_bookings();
    let before = state.clone();
    let _ = project(&state, date("2024-02-01"));
    assert_eq!(state, before);
}
