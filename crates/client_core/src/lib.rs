//! Client-side booking controller: form state, edit mode, validation and
//! synchronization with the booking service.

mod controller;
pub mod error;
pub mod gateway;
pub mod reducer;
pub mod state;
pub mod validation;
pub mod view;

pub use controller::BookingController;
pub use error::{GatewayError, ValidationError};
pub use gateway::{BookingGateway, GatewayOptions, HttpBookingGateway};
pub use state::{BookingState, Draft, EditMode};
pub use view::{BookingRow, FormView, RowAction, View};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
