use shared::{dates::check_range, domain::BookingRequest};

use crate::{error::ValidationError, state::Draft};

/// Turns a draft into a request, or says why it cannot be submitted.
///
/// Missing fields are reported before date ordering. The name is checked for
/// emptiness only; whitespace is left to the service.
pub fn validate_draft(draft: &Draft) -> Result<BookingRequest, ValidationError> {
    let (Some(start_date), Some(end_date)) = (draft.start_date, draft.end_date) else {
        return Err(ValidationError::MissingFields);
    };
    if draft.name.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    check_range(start_date, end_date).map_err(|_| ValidationError::EndNotAfterStart)?;

    Ok(BookingRequest {
        name: draft.name.clone(),
        start_date,
        end_date,
    })
}
