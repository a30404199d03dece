use shared::domain::BookingId;

use super::*;

fn date(raw: &str) -> NaiveDate {
    raw.parse().expect("date")
}

fn sample(id: &str) -> Booking {
    Booking {
        id: BookingId::new(id),
        name: format!("guest {id}"),
        start_date: date("2024-05-01"),
        end_date: date("2024-05-03"),
    }
}

fn editing(id: &str) -> BookingState {
    reduce(BookingState::default(), BookingEvent::EditRequested(sample(id)))
}

#[test]
fn field_edits_only_touch_their_field() {
    let state = reduce(BookingState::default(), BookingEvent::NameEdited("Ann".into()));
    let state = reduce(state, BookingEvent::StartDateEdited(Some(date("2024-05-01"))));
    assert_eq!(state.draft.name, "Ann");
    assert_eq!(state.draft.start_date, Some(date("2024-05-01")));
    assert_eq!(state.draft.end_date, None);

    let state = reduce(state, BookingEvent::StartDateEdited(None));
    assert_eq!(state.draft.start_date, None);
    assert_eq!(state.mode, EditMode::Create);
}

#[test]
fn edit_request_selects_and_copies_booking() {
    let state = editing("b-7");
    assert_eq!(state.mode, EditMode::Edit(BookingId::new("b-7")));
    assert_eq!(state.draft, Draft::from_booking(&sample("b-7")));
}

#[test]
fn edit_request_while_editing_retargets() {
    let state = reduce(editing("b-1"), BookingEvent::EditRequested(sample("b-2")));
    assert_eq!(state.selected_id(), Some(&BookingId::new("b-2")));
    assert_eq!(state.draft.name, "guest b-2");
}

#[test]
fn every_update_outcome_returns_to_create_mode() {
    for outcome in [BookingEvent::UpdateSucceeded, BookingEvent::UpdateFailed] {
        let state = reduce(editing("b-1"), outcome.clone());
        assert_eq!(state.mode, EditMode::Create, "after {outcome:?}");
    }
}

#[test]
fn update_failure_sets_banner_and_success_clears_it() {
    let failed = reduce(editing("b-1"), BookingEvent::UpdateFailed);
    assert_eq!(failed.error_message.as_deref(), Some(UPDATE_FAILED));

    let retried = reduce(failed, BookingEvent::EditRequested(sample("b-1")));
    assert_eq!(retried.error_message.as_deref(), Some(UPDATE_FAILED));
    let saved = reduce(retried, BookingEvent::UpdateSucceeded);
    assert_eq!(saved.error_message, None);
}

#[test]
fn rejection_keeps_mode_and_draft() {
    let before = editing("b-1");
    let after = reduce(
        before.clone(),
        BookingEvent::SubmissionRejected(ValidationError::MissingFields),
    );
    assert_eq!(after.mode, before.mode);
    assert_eq!(after.draft, before.draft);
    assert_eq!(after.error_message.as_deref(), Some("Please fill in all fields."));
}

#[test]
fn create_success_resets_form_and_failure_keeps_it() {
    let filled = reduce(BookingState::default(), BookingEvent::NameEdited("Ann".into()));
    let failed = reduce(filled, BookingEvent::CreateFailed);
    assert_eq!(failed.draft.name, "Ann");
    assert_eq!(failed.error_message.as_deref(), Some(CREATE_FAILED));

    let created = reduce(failed, BookingEvent::CreateSucceeded);
    assert!(created.draft.is_empty());
    assert_eq!(created.error_message, None);
}

#[test]
fn cancel_leaves_draft_in_place() {
    let state = reduce(editing("b-1"), BookingEvent::EditCancelled);
    assert_eq!(state.mode, EditMode::Create);
    assert_eq!(state.draft.name, "guest b-1");

    let again = reduce(state.clone(), BookingEvent::EditCancelled);
    assert_eq!(again, state);
}

#[test]
fn stale_list_tickets_are_ignored() {
    let state = reduce(
        BookingState::default(),
        BookingEvent::ListLoaded {
            ticket: 2,
            bookings: vec![sample("new")],
        },
    );
    let state = reduce(
        state,
        BookingEvent::ListLoaded {
            ticket: 1,
            bookings: vec![sample("old")],
        },
    );
    assert_eq!(state.bookings, vec![sample("new")]);
    assert_eq!(state.list_ticket, 2);

    let state = reduce(
        state,
        BookingEvent::ListLoaded {
            ticket: 3,
            bookings: Vec::new(),
        },
    );
    assert!(state.bookings.is_empty());
}

#[test]
fn list_reload_does_not_touch_form() {
    let before = editing("b-1");
    let after = reduce(
        before.clone(),
        BookingEvent::ListLoaded {
            ticket: 1,
            bookings: Vec::new(),
        },
    );
    assert_eq!(after.draft, before.draft);
    assert_eq!(after.mode, before.mode);
}
