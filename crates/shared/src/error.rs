use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("end date {end} is not after start date {start}")]
    EndNotAfterStart { start: NaiveDate, end: NaiveDate },
}
