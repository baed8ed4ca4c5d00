//! Per-call tracing and metrics shared by every service method.
//!
//! Each call gets a fresh trace id and emits:
//! - `<service>_request_total{method, status}` - one increment per call
//! - `<service>_request_duration_seconds{method}` - call latency

use std::fmt::Display;
use std::time::Instant;

use metrics::{counter, histogram};
use uuid::Uuid;

use crate::domain::errors::ServiceError;

pub fn new_trace_id() -> String {
    Uuid::new_v4().simple().to_string()
}

pub struct Instrument {
    service: String,
    requests: String,
    durations: String,
}

impl Instrument {
    pub fn new(service: impl Into<String>) -> Self {
        let service = service.into();
        Self {
            requests: format!("{}_request_total", service),
            durations: format!("{}_request_duration_seconds", service),
            service,
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    /// Runs `f` as one observed call of `method`.
    pub fn observe<T, F>(&self, method: &'static str, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&Call<'_>) -> Result<T, ServiceError>,
    {
        let call = Call {
            trace_id: new_trace_id(),
            service: &self.service,
            method,
        };
        let start = Instant::now();
        log::info!(
            "trace_id={} service={} method={} starting",
            call.trace_id,
            call.service,
            method
        );

        let result = f(&call);
        let status = if result.is_ok() { "success" } else { "error" };

        histogram!(self.durations.clone(), "method" => method)
            .record(start.elapsed().as_secs_f64());
        counter!(self.requests.clone(), "method" => method, "status" => status).increment(1);

        match &result {
            Ok(_) => log::info!(
                "trace_id={} service={} method={} succeeded",
                call.trace_id,
                call.service,
                method
            ),
            Err(err) => log::error!(
                "trace_id={} service={} method={} failed: {}",
                call.trace_id,
                call.service,
                method,
                err
            ),
        }

        result
    }
}

/// Handle passed to an observed call body.
pub struct Call<'a> {
    trace_id: String,
    service: &'a str,
    method: &'static str,
}

impl Call<'_> {
    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Logs an infrastructure failure and returns the static error to hand
    /// back instead.
    pub fn fail(&self, cause: impl Display, returned: ServiceError) -> ServiceError {
        log::error!(
            "trace_id={} service={} method={} cause={}",
            self.trace_id,
            self.service,
            self.method,
            cause
        );
        returned
    }

    /// Logs a rejected request.
    pub fn reject(&self, cause: impl Display, returned: ServiceError) -> ServiceError {
        log::warn!(
            "trace_id={} service={} method={} rejected: {}",
            self.trace_id,
            self.service,
            self.method,
            cause
        );
        returned
    }

    pub fn warn(&self, message: impl Display) {
        log::warn!(
            "trace_id={} service={} method={} {}",
            self.trace_id,
            self.service,
            self.method,
            message
        );
    }
}
