//! Route segments of the booking service, relative to its base URL.

/// `GET` lists every booking.
pub const BOOKINGS_SEGMENT: &str = "bookings";
/// `POST` creates; `POST /{id}` updates; `DELETE /{id}` removes.
pub const BOOKING_SEGMENT: &str = "booking";

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080/api";
