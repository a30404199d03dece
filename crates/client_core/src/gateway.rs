use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::{Booking, BookingId, BookingRequest},
    protocol::{BOOKINGS_SEGMENT, BOOKING_SEGMENT},
};
use url::Url;

use crate::error::GatewayError;

/// The four calls the controller makes against the booking service.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Booking>, GatewayError>;
    async fn create(&self, request: &BookingRequest) -> Result<(), GatewayError>;
    async fn update(&self, id: &BookingId, request: &BookingRequest) -> Result<(), GatewayError>;
    async fn delete(&self, id: &BookingId) -> Result<(), GatewayError>;
}

#[derive(Debug, Clone)]
pub struct GatewayOptions {
    pub base_url: Url,
    /// `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
}

impl GatewayOptions {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            request_timeout: None,
        }
    }
}

pub struct HttpBookingGateway {
    http: Client,
    base_url: Url,
}

impl HttpBookingGateway {
    pub fn new(options: GatewayOptions) -> Result<Self, GatewayError> {
        if options.base_url.cannot_be_a_base() {
            return Err(GatewayError::InvalidBaseUrl(options.base_url.to_string()));
        }
        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: options.base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GatewayError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

async fn ensure_success(response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(GatewayError::Status { status, body })
}

#[async_trait]
impl BookingGateway for HttpBookingGateway {
    async fn list(&self) -> Result<Vec<Booking>, GatewayError> {
        let url = self.endpoint(&[BOOKINGS_SEGMENT])?;
        let response = ensure_success(self.http.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, request: &BookingRequest) -> Result<(), GatewayError> {
        let url = self.endpoint(&[BOOKING_SEGMENT])?;
        ensure_success(self.http.post(url).json(request).send().await?).await?;
        Ok(())
    }

    async fn update(&self, id: &BookingId, request: &BookingRequest) -> Result<(), GatewayError> {
        let url = self.endpoint(&[BOOKING_SEGMENT, id.as_str()])?;
        ensure_success(self.http.post(url).json(request).send().await?).await?;
        Ok(())
    }

    async fn delete(&self, id: &BookingId) -> Result<(), GatewayError> {
        let url = self.endpoint(&[BOOKING_SEGMENT, id.as_str()])?;
        ensure_success(self.http.delete(url).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/gateway_tests.rs"]
mod tests;
