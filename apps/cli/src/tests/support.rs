use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use async_trait::async_trait;
use chrono::NaiveDate;
use client_core::{BookingGateway, GatewayError};
use reqwest::StatusCode;
use shared::domain::{Booking, BookingId, BookingRequest};

/// In-memory stand-in for the booking service.
#[derive(Default)]
pub(crate) struct MemoryGateway {
    pub(crate) bookings: Mutex<Vec<Booking>>,
    pub(crate) deleted: Mutex<Vec<BookingId>>,
    pub(crate) fail_update: AtomicBool,
}

impl MemoryGateway {
    pub(crate) fn with_bookings(bookings: Vec<Booking>) -> Self {
        let gateway = Self::default();
        *gateway.bookings.lock().expect("lock") = bookings;
        gateway
    }
}

pub(crate) fn date(raw: &str) -> NaiveDate {
    raw.parse().expect("date")
}

pub(crate) fn booking(id: &str, name: &str, start: &str, end: &str) -> Booking {
    Booking {
        id: BookingId::new(id),
        name: name.to_string(),
        start_date: date(start),
        end_date: date(end),
    }
}

#[async_trait]
impl BookingGateway for MemoryGateway {
    async fn list(&self) -> Result<Vec<Booking>, GatewayError> {
        Ok(self.bookings.lock().expect("lock").clone())
    }

    async fn create(&self, request: &BookingRequest) -> Result<(), GatewayError> {
        let mut bookings = self.bookings.lock().expect("lock");
        let id = BookingId::new(format!("m-{}", bookings.len() + 1));
        bookings.push(Booking {
            id,
            name: request.name.clone(),
            start_date: request.start_date,
            end_date: request.end_date,
        });
        Ok(())
    }

    async fn update(&self, id: &BookingId, request: &BookingRequest) -> Result<(), GatewayError> {
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(GatewayError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "unavailable".to_string(),
            });
        }
        let mut bookings = self.bookings.lock().expect("lock");
        if let Some(booking) = bookings.iter_mut().find(|booking| &booking.id == id) {
            booking.name = request.name.clone();
            booking.start_date = request.start_date;
            booking.end_date = request.end_date;
        }
        Ok(())
    }

    async fn delete(&self, id: &BookingId) -> Result<(), GatewayError> {
        self.deleted.lock().expect("lock").push(id.clone());
        self.bookings
            .lock()
            .expect("lock")
            .retain(|booking| &booking.id != id);
        Ok(())
    }
}
