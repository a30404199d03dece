use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, MutexGuard, PoisonError,
};

use chrono::{Local, NaiveDate};
use shared::domain::{BookingId, BookingRequest};
use tracing::{debug, error, info, warn};

use crate::{
    error::ValidationError,
    gateway::BookingGateway,
    reducer::{reduce, BookingEvent},
    state::BookingState,
    validation::validate_draft,
    view::{project, RowAction, View},
};

/// Owns the booking list and form state and keeps them in sync with the
/// booking service.
///
/// Operations never return errors: request failures end up either in the
/// log or in the error banner. The state lock is only held for a single
/// reducer step, so operations issued concurrently do not wait on each other.
pub struct BookingController {
    gateway: Arc<dyn BookingGateway>,
    state: Mutex<BookingState>,
    list_tickets: AtomicU64,
}

impl BookingController {
    pub fn new(gateway: Arc<dyn BookingGateway>) -> Self {
        Self {
            gateway,
            state: Mutex::new(BookingState::default()),
            list_tickets: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BookingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch(&self, event: BookingEvent) {
        let mut state = self.lock();
        let current = std::mem::take(&mut *state);
        *state = reduce(current, event);
    }

    pub fn snapshot(&self) -> BookingState {
        self.lock().clone()
    }

    pub fn view(&self) -> View {
        self.view_at(Local::now().date_naive())
    }

    pub fn view_at(&self, today: NaiveDate) -> View {
        project(&self.lock(), today)
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.dispatch(BookingEvent::NameEdited(name.into()));
    }

    pub fn set_start_date(&self, date: Option<NaiveDate>) {
        self.dispatch(BookingEvent::StartDateEdited(date));
    }

    pub fn set_end_date(&self, date: Option<NaiveDate>) {
        self.dispatch(BookingEvent::EndDateEdited(date));
    }

    /// Copies a listed booking into the form and selects it for editing.
    /// Returns `false` when the id is not in the current list.
    pub fn begin_edit(&self, id: &BookingId) -> bool {
        let listed = self.lock().find(id).cloned();
        let Some(booking) = listed else {
            debug!(booking_id = %id, "edit requested for unlisted booking");
            return false;
        };
        debug!(booking_id = %id, "entering edit mode");
        self.dispatch(BookingEvent::EditRequested(booking));
        true
    }

    pub fn cancel_edit(&self) {
        self.dispatch(BookingEvent::EditCancelled);
    }

    pub async fn perform(&self, action: RowAction) {
        match action {
            RowAction::Delete(id) => self.delete(&id).await,
            RowAction::BeginEdit(id) => {
                self.begin_edit(&id);
            }
        }
    }

    /// Replaces the booking list with the service's current one.
    pub async fn refresh(&self) {
        let ticket = self.list_tickets.fetch_add(1, Ordering::SeqCst) + 1;
        match self.gateway.list().await {
            Ok(bookings) => {
                debug!(ticket, count = bookings.len(), "booking list loaded");
                self.dispatch(BookingEvent::ListLoaded { ticket, bookings });
            }
            Err(error) => error!(%error, "failed to fetch bookings"),
        }
    }

    fn validated_request(&self) -> Option<BookingRequest> {
        let result = validate_draft(&self.lock().draft);
        match result {
            Ok(request) => Some(request),
            Err(err) => {
                self.reject(err);
                None
            }
        }
    }

    fn reject(&self, err: ValidationError) {
        warn!(reason = ?err, "booking submission rejected");
        self.dispatch(BookingEvent::SubmissionRejected(err));
    }

    pub async fn submit_create(&self) {
        let Some(request) = self.validated_request() else {
            return;
        };
        match self.gateway.create(&request).await {
            Ok(()) => {
                info!(
                    name = %request.name,
                    start = %request.start_date,
                    end = %request.end_date,
                    "booking created"
                );
                self.dispatch(BookingEvent::CreateSucceeded);
                self.refresh().await;
            }
            Err(error) => {
                error!(%error, "failed to create booking");
                self.dispatch(BookingEvent::CreateFailed);
            }
        }
    }

    /// Saves the form onto the booking being edited. Whatever the outcome of
    /// the request, the controller is back in create mode afterwards.
    pub async fn submit_update(&self) {
        let selected = self.lock().selected_id().cloned();
        let Some(id) = selected else {
            debug!("save requested outside edit mode");
            return;
        };
        let Some(request) = self.validated_request() else {
            return;
        };
        match self.gateway.update(&id, &request).await {
            Ok(()) => {
                info!(booking_id = %id, "booking updated");
                self.dispatch(BookingEvent::UpdateSucceeded);
                self.refresh().await;
            }
            Err(error) => {
                error!(booking_id = %id, %error, "failed to update booking");
                self.dispatch(BookingEvent::UpdateFailed);
            }
        }
    }

    pub async fn delete(&self, id: &BookingId) {
        match self.gateway.delete(id).await {
            Ok(()) => {
                info!(booking_id = %id, "booking deleted");
                self.refresh().await;
            }
            Err(error) => error!(booking_id = %id, %error, "failed to delete booking"),
        }
    }
}
